//! famtree: a minimal genealogical tree.
//!
//! Persons live in a generational arena ([`domain::FamilyTree`]); parents own
//! the handles of their children in insertion order. The tree is rendered with
//! box-drawing glyphs and released post-order.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
