use crate::filmography::{Filmography, PersonId};
use unidecode::unidecode;

/// Key used for the name index: ASCII-folded, lowercased, single-spaced.
pub fn normalize_name(input: &str) -> String {
    unidecode(input)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonMatch {
    Unique(PersonId),
    /// Several people share the name; candidates are sorted by id.
    Ambiguous(Vec<PersonId>),
    NotFound,
}

pub fn resolve_person(name: &str, filmography: &Filmography) -> PersonMatch {
    let mut candidates = filmography.people_named(&normalize_name(name)).to_vec();

    match candidates.len() {
        0 => PersonMatch::NotFound,
        1 => PersonMatch::Unique(candidates.remove(0)),
        _ => {
            candidates.sort();
            PersonMatch::Ambiguous(candidates)
        }
    }
}

/// One line describing a candidate, used when asking which person was meant.
pub fn candidate_summary(id: &PersonId, filmography: &Filmography) -> String {
    match filmography.person(id) {
        Some(person) => {
            let birth = person
                .birth
                .map(|year| year.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            format!("ID: {}, Name: {}, Birth: {}", id, person.name, birth)
        }
        None => format!("ID: {}", id),
    }
}
