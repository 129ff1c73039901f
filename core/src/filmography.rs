use crate::error::DataError;
use crate::lookup::normalize_name;
use crate::pathfinding::PathStep;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkId(String);

impl WorkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
    pub works: FxHashSet<WorkId>,
}

#[derive(Debug, Clone)]
pub struct Work {
    pub id: WorkId,
    pub title: String,
    pub year: Option<u16>,
    pub stars: FxHashSet<PersonId>,
}

/// Read-only adjacency the search engine runs over.
///
/// A neighbor of a person is every `(work, other person)` pair where both
/// people appear in `work`. Implementations must keep membership symmetric.
pub trait GraphIndex {
    fn neighbors_of(&self, person: &PersonId) -> Vec<PathStep>;
}

/// In-memory people/works tables plus a normalized name index.
///
/// Credits can only be added through [`Filmography::add_credit`], which updates
/// both sides at once, so a person lists a work iff the work lists the person.
#[derive(Debug, Default)]
pub struct Filmography {
    people: FxHashMap<PersonId, Person>,
    works: FxHashMap<WorkId, Work>,
    names: FxHashMap<String, Vec<PersonId>>,
}

impl Filmography {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` and leaves the table untouched if the id is already taken.
    pub fn add_person(&mut self, id: PersonId, name: impl Into<String>, birth: Option<u16>) -> bool {
        if self.people.contains_key(&id) {
            return false;
        }

        let name = name.into();
        self.names
            .entry(normalize_name(&name))
            .or_default()
            .push(id.clone());
        self.people.insert(
            id.clone(),
            Person {
                id,
                name,
                birth,
                works: FxHashSet::default(),
            },
        );
        true
    }

    /// Returns `false` and leaves the table untouched if the id is already taken.
    pub fn add_work(&mut self, id: WorkId, title: impl Into<String>, year: Option<u16>) -> bool {
        if self.works.contains_key(&id) {
            return false;
        }

        self.works.insert(
            id.clone(),
            Work {
                id,
                title: title.into(),
                year,
                stars: FxHashSet::default(),
            },
        );
        true
    }

    pub fn add_credit(&mut self, person_id: &PersonId, work_id: &WorkId) -> Result<(), DataError> {
        let work = self
            .works
            .get_mut(work_id)
            .ok_or_else(|| DataError::UnknownWork(work_id.clone()))?;
        let person = self
            .people
            .get_mut(person_id)
            .ok_or_else(|| DataError::UnknownPerson(person_id.clone()))?;

        person.works.insert(work_id.clone());
        work.stars.insert(person_id.clone());
        Ok(())
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn work(&self, id: &WorkId) -> Option<&Work> {
        self.works.get(id)
    }

    /// Ids of everyone whose normalized name equals `normalized_name`.
    pub fn people_named(&self, normalized_name: &str) -> &[PersonId] {
        self.names
            .get(normalized_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn work_count(&self) -> usize {
        self.works.len()
    }

    pub fn credit_count(&self) -> usize {
        self.works.values().map(|work| work.stars.len()).sum()
    }
}

impl GraphIndex for Filmography {
    fn neighbors_of(&self, person_id: &PersonId) -> Vec<PathStep> {
        let Some(person) = self.people.get(person_id) else {
            return vec![];
        };

        let mut neighbors: Vec<PathStep> = person
            .works
            .iter()
            .filter_map(|work_id| self.works.get(work_id))
            .flat_map(|work| {
                work.stars
                    .iter()
                    .filter(move |&co_star| co_star != person_id)
                    .map(move |co_star| PathStep::new(work.id.clone(), co_star.clone()))
            })
            .collect();

        // Hash sets have no stable order; sort so searches are reproducible.
        neighbors.sort_unstable();
        neighbors
    }
}
