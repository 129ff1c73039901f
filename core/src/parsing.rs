use crate::error::DataError;
use crate::filmography::{Filmography, PersonId, WorkId};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::{fs::File, path::Path};
use tracing::{debug, info};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: PersonId,
    name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    birth: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: WorkId,
    title: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    year: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: PersonId,
    movie_id: WorkId,
}

/// Loads `people.csv`, `movies.csv` and `stars.csv` from `data_dir`.
///
/// Credits naming an unknown person or movie are skipped. Duplicate person or
/// movie ids keep their first row.
pub fn load_filmography(data_dir: &Path) -> Result<Filmography, DataError> {
    let mut filmography = Filmography::new();

    let duplicate_people = load_people(&data_dir.join(PEOPLE_FILE), &mut filmography)?;
    let duplicate_movies = load_movies(&data_dir.join(MOVIES_FILE), &mut filmography)?;
    let skipped_credits = load_credits(&data_dir.join(STARS_FILE), &mut filmography)?;

    info!(
        dir = %data_dir.display(),
        people = filmography.person_count(),
        works = filmography.work_count(),
        credits = filmography.credit_count(),
        duplicate_people,
        duplicate_movies,
        skipped_credits,
        "filmography loaded"
    );

    Ok(filmography)
}

fn load_people(path: &Path, filmography: &mut Filmography) -> Result<usize, DataError> {
    let mut duplicates = 0;
    for_each_row(path, |row: PersonRow| {
        if !filmography.add_person(row.id, row.name, row.birth) {
            duplicates += 1;
        }
    })?;
    Ok(duplicates)
}

fn load_movies(path: &Path, filmography: &mut Filmography) -> Result<usize, DataError> {
    let mut duplicates = 0;
    for_each_row(path, |row: MovieRow| {
        if !filmography.add_work(row.id, row.title, row.year) {
            duplicates += 1;
        }
    })?;
    Ok(duplicates)
}

fn load_credits(path: &Path, filmography: &mut Filmography) -> Result<usize, DataError> {
    let mut skipped = 0;
    for_each_row(path, |row: StarRow| {
        if let Err(error) = filmography.add_credit(&row.person_id, &row.movie_id) {
            debug!(%error, "skipping credit");
            skipped += 1;
        }
    })?;
    Ok(skipped)
}

fn for_each_row<T: DeserializeOwned>(
    path: &Path,
    mut handle_row: impl FnMut(T),
) -> Result<(), DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    for row in reader.deserialize::<T>() {
        let row = row.map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        handle_row(row);
    }

    Ok(())
}
