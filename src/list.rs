use crate::person::Person;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice;

/// Ordered collection of people, fixed once built.
///
/// Insertion order is preserved; the type exposes no mutating methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonList(Vec<Person>);

impl PersonList {
    pub fn new(people: Vec<Person>) -> Self {
        Self(people)
    }

    /// Forward traversal in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Person> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a PersonList {
    type Item = &'a Person;
    type IntoIter = slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Person> for PersonList {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Bracketed one-line rendering: `[Name (age), Name (age)]`.
impl fmt::Display for PersonList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}
