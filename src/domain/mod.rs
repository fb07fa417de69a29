//! Domain layer: entities and tree logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod printer;

pub use arena::{FamilyTree, PersonNode};
pub use builder::{TreeBuilder, ValidationPolicy, DEFAULT_DATE_FORMAT};
pub use entities::*;
pub use error::{DomainError, DomainResult};
