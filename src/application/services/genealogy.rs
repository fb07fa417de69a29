//! Genealogy service
//!
//! Builds the sample family, renders it and releases it again.

use generational_arena::Index;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{FamilyTree, TreeBuilder, ValidationPolicy};

/// A built tree together with its root and the number of persons created.
#[derive(Debug)]
pub struct SampleTree {
    pub tree: FamilyTree,
    pub root: Index,
    pub created: usize,
}

/// Service orchestrating build, render and teardown of family trees.
pub struct GenealogyService {
    policy: ValidationPolicy,
}

impl GenealogyService {
    /// Create a new genealogy service.
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Build the fixed five-person sample family.
    ///
    /// Avô has children Pai and Tia (in that order); Pai has Filho and Filha.
    #[instrument(level = "debug", skip(self))]
    pub fn sample_tree(&self) -> ApplicationResult<SampleTree> {
        let mut builder = TreeBuilder::new(self.policy.clone());

        let avo = builder.person("Avô", "1945-01-01", 'M')?;
        let pai = builder.person("Pai", "1970-06-15", 'M')?;
        let tia = builder.person("Tia", "1972-09-20", 'F')?;
        builder.link(avo, pai)?.link(avo, tia)?;

        let filho = builder.person("Filho", "1995-03-10", 'M')?;
        let filha = builder.person("Filha", "1998-11-05", 'F')?;
        builder.link(pai, filho)?.link(pai, filha)?;

        let created = builder.created();
        Ok(SampleTree {
            tree: builder.build(),
            root: avo,
            created,
        })
    }

    /// Render the tree under `root`, then release it post-order.
    ///
    /// Fails with `Teardown` if the number of released persons differs
    /// from `expected`.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn render_and_release(
        &self,
        tree: &mut FamilyTree,
        root: Index,
        expected: usize,
    ) -> ApplicationResult<String> {
        let rendered = tree.render(Some(root))?;
        let released = tree.destroy_tree(Some(root))?;
        debug!("render_and_release: released={}, expected={}", released, expected);
        if released != expected {
            return Err(ApplicationError::Teardown {
                created: expected,
                released,
            });
        }
        Ok(rendered)
    }

    /// Build, render and tear down the sample family.
    pub fn show_sample(&self) -> ApplicationResult<String> {
        let SampleTree {
            mut tree,
            root,
            created,
        } = self.sample_tree()?;
        info!("sample tree built with {} persons", created);
        self.render_and_release(&mut tree, root, created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_partial_expectation_when_releasing_then_teardown_error() {
        let service = GenealogyService::new(ValidationPolicy::Lenient);
        let mut sample = service.sample_tree().unwrap();

        let result = service.render_and_release(&mut sample.tree, sample.root, sample.created + 1);
        assert!(matches!(
            result,
            Err(ApplicationError::Teardown {
                created: 6,
                released: 5
            })
        ));
    }
}
