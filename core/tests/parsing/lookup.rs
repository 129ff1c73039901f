use degrees_core::{
    Filmography, PersonId, PersonMatch, candidate_summary, normalize_name, resolve_person,
};

fn people() -> Filmography {
    let mut filmography = Filmography::new();
    filmography.add_person(PersonId::from("158"), "Tom Hanks", Some(1956));
    filmography.add_person(PersonId::from("9999"), "Tom  Hanks", None);
    filmography.add_person(PersonId::from("102"), "Kevin Bacon", Some(1958));
    filmography.add_person(PersonId::from("420"), "Björk", Some(1965));
    filmography
}

#[test]
fn test_normalize_name_folds_case_and_spacing() {
    assert_eq!(normalize_name("Kevin Bacon"), "kevin bacon");
    assert_eq!(normalize_name("  KEVIN   bacon "), "kevin bacon");
    assert_eq!(normalize_name("\tkevin\tbacon\t"), "kevin bacon");
}

#[test]
fn test_normalize_name_strips_accents() {
    assert_eq!(normalize_name("Björk"), "bjork");
    assert_eq!(normalize_name("Penélope Cruz"), "penelope cruz");
}

#[test]
fn test_resolve_unique_name() {
    let filmography = people();

    assert_eq!(
        resolve_person("kevin BACON", &filmography),
        PersonMatch::Unique(PersonId::from("102"))
    );
    assert_eq!(
        resolve_person("BJORK", &filmography),
        PersonMatch::Unique(PersonId::from("420"))
    );
}

#[test]
fn test_resolve_shared_name_is_ambiguous() {
    let filmography = people();

    assert_eq!(
        resolve_person("Tom Hanks", &filmography),
        PersonMatch::Ambiguous(vec![PersonId::from("158"), PersonId::from("9999")])
    );
}

#[test]
fn test_resolve_unknown_and_empty_names() {
    let filmography = people();

    assert_eq!(resolve_person("Nobody", &filmography), PersonMatch::NotFound);
    assert_eq!(resolve_person("", &filmography), PersonMatch::NotFound);
    assert_eq!(resolve_person("   ", &filmography), PersonMatch::NotFound);
}

#[test]
fn test_candidate_summary() {
    let filmography = people();

    assert_eq!(
        candidate_summary(&PersonId::from("158"), &filmography),
        "ID: 158, Name: Tom Hanks, Birth: 1956"
    );
    assert_eq!(
        candidate_summary(&PersonId::from("9999"), &filmography),
        "ID: 9999, Name: Tom  Hanks, Birth: unknown"
    );
    assert_eq!(candidate_summary(&PersonId::from("1"), &filmography), "ID: 1");
}
