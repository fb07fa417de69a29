//! Domain entities: core data structures

use std::fmt;

use chrono::NaiveDate;

use crate::domain::error::{DomainError, DomainResult};

/// Gender code of a person.
///
/// Conversion from `char` is total: codes other than `M` and `F` are kept
/// as `Other` so that lenient construction accepts any character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other(char),
}

impl Gender {
    /// Single-character code as written in the rendered tree.
    pub fn code(&self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
            Gender::Other(c) => *c,
        }
    }

    /// Whether the code belongs to the `{M, F}` domain.
    pub fn is_known(&self) -> bool {
        !matches!(self, Gender::Other(_))
    }
}

impl From<char> for Gender {
    fn from(c: char) -> Self {
        match c {
            'M' => Gender::Male,
            'F' => Gender::Female,
            other => Gender::Other(other),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A person record. Tree links live in the arena node, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    /// Free text, not parsed unless strict validation is requested
    pub birth_date: String,
    pub gender: Gender,
}

impl Person {
    pub fn new(name: impl Into<String>, birth_date: impl Into<String>, gender: impl Into<Gender>) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
            gender: gender.into(),
        }
    }

    /// Check gender and birth date against the strict rules.
    ///
    /// The birth date must parse with the given chrono format string,
    /// e.g. `%Y-%m-%d`.
    pub fn validate(&self, date_format: &str) -> DomainResult<()> {
        if !self.gender.is_known() {
            return Err(DomainError::InvalidGender(self.gender.code()));
        }
        NaiveDate::parse_from_str(&self.birth_date, date_format).map_err(|e| {
            DomainError::InvalidBirthDate {
                value: self.birth_date.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.birth_date, self.gender)
    }
}
