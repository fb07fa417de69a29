//! Box-drawing renderer for family trees.
//!
//! ```text
//! Avô (1945-01-01, M)
//! ├── Pai (1970-06-15, M)
//! │   └── Filho (1995-03-10, M)
//! └── Tia (1972-09-20, F)
//! ```

use std::fmt::{self, Write};

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::FamilyTree;
use crate::domain::error::{DomainError, DomainResult};

const GLYPH_TEE: &str = "├── ";
const GLYPH_LAST: &str = "└── ";
const GLYPH_BRANCH: &str = "│   ";
const GLYPH_SPACE: &str = "    ";

impl FamilyTree {
    /// Renders the subtree rooted at `root`, one line per person.
    ///
    /// An absent root renders as the empty string.
    ///
    /// # Errors
    /// * `InvalidReference` if `root` is unknown or stale
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self, root: Option<Index>) -> DomainResult<String> {
        let mut out = String::new();
        self.write_tree(&mut out, root)?;
        Ok(out)
    }

    /// Writes the rendering of the subtree rooted at `root` into `out`.
    pub fn write_tree<W: Write>(&self, out: &mut W, root: Option<Index>) -> DomainResult<()> {
        let Some(root) = root else {
            return Ok(());
        };
        let node = self
            .get_node(root)
            .ok_or(DomainError::InvalidReference(root))?;
        writeln!(out, "{}", node.person)?;
        self.write_children(out, &node.children, "")?;
        Ok(())
    }

    fn write_children<W: Write>(&self, out: &mut W, children: &[Index], prefix: &str) -> fmt::Result {
        for (i, &child) in children.iter().enumerate() {
            let last = i + 1 == children.len();
            self.write_node(out, child, prefix, last)?;
        }
        Ok(())
    }

    fn write_node<W: Write>(&self, out: &mut W, idx: Index, prefix: &str, last: bool) -> fmt::Result {
        // A child handle without a slot means the tree is corrupt.
        let node = self.get_node(idx).ok_or(fmt::Error)?;
        let glyph = if last { GLYPH_LAST } else { GLYPH_TEE };
        writeln!(out, "{}{}{}", prefix, glyph, node.person)?;

        let child_prefix = format!("{}{}", prefix, if last { GLYPH_SPACE } else { GLYPH_BRANCH });
        self.write_children(out, &node.children, &child_prefix)
    }
}
