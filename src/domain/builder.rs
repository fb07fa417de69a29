//! Tree builder for assembling family trees with optional validation.

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::FamilyTree;
use crate::domain::entities::{Gender, Person};
use crate::domain::error::DomainResult;

/// Default birth date format for strict validation.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// How person records are checked before they enter the tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Accept any name, birth date text and gender character.
    #[default]
    Lenient,
    /// Require gender `M`/`F` and a birth date matching `date_format`.
    Strict { date_format: String },
}

impl ValidationPolicy {
    pub fn strict() -> Self {
        ValidationPolicy::Strict {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    fn check(&self, person: &Person) -> DomainResult<()> {
        match self {
            ValidationPolicy::Lenient => Ok(()),
            ValidationPolicy::Strict { date_format } => person.validate(date_format),
        }
    }
}

/// Constructs family trees, applying a validation policy to every person.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: FamilyTree,
    policy: ValidationPolicy,
    created: usize,
}

impl TreeBuilder {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            tree: FamilyTree::new(),
            policy,
            created: 0,
        }
    }

    /// Create a detached person after checking it against the policy.
    #[instrument(level = "debug", skip_all)]
    pub fn person(
        &mut self,
        name: impl Into<String>,
        birth_date: impl Into<String>,
        gender: impl Into<Gender>,
    ) -> DomainResult<Index> {
        let person = Person::new(name, birth_date, gender);
        debug!("person: {}", person);
        self.policy.check(&person)?;
        self.created += 1;
        Ok(self.tree.insert_person(person))
    }

    /// Link `child` under `parent`.
    pub fn link(&mut self, parent: Index, child: Index) -> DomainResult<&mut Self> {
        self.tree.add_child(parent, child)?;
        Ok(self)
    }

    /// Number of persons created through this builder.
    pub fn created(&self) -> usize {
        self.created
    }

    pub fn tree(&self) -> &FamilyTree {
        &self.tree
    }

    pub fn build(self) -> FamilyTree {
        debug!("built tree with {} persons", self.created);
        self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_lenient_policy_when_creating_odd_person_then_accepts() {
        let mut builder = TreeBuilder::new(ValidationPolicy::Lenient);
        let idx = builder.person("?", "sometime", 'Z').unwrap();
        assert_eq!(builder.tree().person(idx).unwrap().gender, Gender::Other('Z'));
        assert_eq!(builder.created(), 1);
    }

    #[test]
    fn given_strict_policy_when_creating_unknown_gender_then_rejects_without_insert() {
        let mut builder = TreeBuilder::new(ValidationPolicy::strict());
        let result = builder.person("Tia", "1972-09-20", 'X');
        assert_eq!(result, Err(DomainError::InvalidGender('X')));
        assert_eq!(builder.created(), 0);
        assert!(builder.build().is_empty());
    }

    #[test]
    fn given_builder_when_linking_then_chains() {
        let mut builder = TreeBuilder::default();
        let a = builder.person("A", "1", 'M').unwrap();
        let b = builder.person("B", "2", 'F').unwrap();
        let c = builder.person("C", "3", 'M').unwrap();
        builder.link(a, b).unwrap().link(a, c).unwrap();

        let tree = builder.build();
        assert_eq!(tree.children_of(a), &[b, c]);
    }
}
