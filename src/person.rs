use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Construction errors for [`Person`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersonError {
    #[error("person name must not be empty")]
    EmptyName,
}

/// Immutable record of one person: a name and an age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    /// Builds a person, rejecting empty or whitespace-only names.
    pub fn new(name: impl Into<String>, age: u32) -> Result<Self, PersonError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PersonError::EmptyName);
        }
        Ok(Self { name, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// One-line description derived from both fields.
    pub fn career(&self) -> String {
        format!("{} is {} years old", self.name, self.age)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}
