use super::fixtures::{args, sample_filmography};
use degrees::colors::ColorScheme;
use degrees::display::{format_degrees, format_path_lines};
use degrees_core::{PathStep, PersonId, WorkId};

fn cruise_to_hanks() -> Vec<PathStep> {
    vec![
        PathStep::new(WorkId::from("104257"), PersonId::from("102")),
        PathStep::new(WorkId::from("112384"), PersonId::from("158")),
    ]
}

#[test]
fn test_path_lines_name_both_people_and_the_movie() {
    let colors = ColorScheme::new(false);
    let filmography = sample_filmography();

    let lines = format_path_lines(
        &cruise_to_hanks(),
        &PersonId::from("129"),
        &filmography,
        &args(&[]),
        &colors,
    );

    assert_eq!(
        lines,
        [
            "1: Tom Cruise and Kevin Bacon starred in A Few Good Men",
            "2: Kevin Bacon and Tom Hanks starred in Apollo 13",
        ]
    );
}

#[test]
fn test_path_lines_with_ids() {
    let colors = ColorScheme::new(false);
    let filmography = sample_filmography();

    let lines = format_path_lines(
        &cruise_to_hanks(),
        &PersonId::from("129"),
        &filmography,
        &args(&["--show-ids"]),
        &colors,
    );

    assert_eq!(
        lines[0],
        "1: Tom Cruise [129] and Kevin Bacon [102] starred in A Few Good Men [104257]"
    );
}

#[test]
fn test_empty_path_has_no_lines() {
    let colors = ColorScheme::new(false);
    let filmography = sample_filmography();

    let lines = format_path_lines(&[], &PersonId::from("102"), &filmography, &args(&[]), &colors);

    assert!(lines.is_empty());
    assert_eq!(format_degrees(0, &colors), "0 degrees of separation.");
}

#[test]
fn test_unknown_ids_fall_back_to_raw_ids() {
    let colors = ColorScheme::new(false);
    let filmography = sample_filmography();
    let path = vec![PathStep::new(WorkId::from("m9"), PersonId::from("p9"))];

    let lines = format_path_lines(&path, &PersonId::from("p0"), &filmography, &args(&[]), &colors);

    assert_eq!(lines, ["1: p0 and p9 starred in m9"]);
}

#[test]
fn test_degrees_line() {
    let colors = ColorScheme::new(false);

    assert_eq!(format_degrees(2, &colors), "2 degrees of separation.");
}
