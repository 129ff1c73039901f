use anyhow::bail;
use degrees_core::{
    Filmography, PersonId, PersonMatch, SearchOutcome, candidate_summary, find_path,
    resolve_person,
};
use std::io::{BufRead, Write};

use crate::args::Args;

pub struct SearchRequest {
    pub source: PersonId,
    pub target: PersonId,
    pub source_name: String,
    pub target_name: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub people_explored: usize,
    pub search_duration: f64,
    pub source: PersonId,
    pub source_name: String,
    pub target_name: String,
    pub display_options: Args,
}

/// Maps a typed name to one person id, asking on `output` and reading the
/// answer from `input` when several people share the name.
pub fn choose_person<R: BufRead, W: Write>(
    name: &str,
    filmography: &Filmography,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<PersonId> {
    match resolve_person(name, filmography) {
        PersonMatch::Unique(person_id) => Ok(person_id),
        PersonMatch::NotFound => bail!("Person '{}' not found", name),
        PersonMatch::Ambiguous(candidates) => {
            writeln!(output, "Which '{}'?", name)?;
            for candidate in &candidates {
                writeln!(output, "{}", candidate_summary(candidate, filmography))?;
            }
            write!(output, "Intended Person ID: ")?;
            output.flush()?;

            let mut answer = String::new();
            input.read_line(&mut answer)?;
            let chosen = PersonId::new(answer.trim());

            if candidates.contains(&chosen) {
                Ok(chosen)
            } else {
                bail!("Person '{}' not found", name)
            }
        }
    }
}

/// Asks for a name with a `Name: ` prompt and returns the trimmed answer.
pub fn read_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<String> {
    write!(output, "Name: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let name = answer.trim();

    if name.is_empty() {
        bail!("No name given");
    }
    Ok(name.to_string())
}

pub fn create_search_request<R: BufRead, W: Write>(
    args: Args,
    filmography: &Filmography,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<SearchRequest> {
    let source_query = match &args.source {
        Some(name) => name.clone(),
        None => read_name(input, output)?,
    };
    let source = choose_person(&source_query, filmography, input, output)?;

    let target_query = match &args.target {
        Some(name) => name.clone(),
        None => read_name(input, output)?,
    };
    let target = choose_person(&target_query, filmography, input, output)?;

    let source_name = person_name(&source, filmography);
    let target_name = person_name(&target, filmography);

    Ok(SearchRequest {
        source,
        target,
        source_name,
        target_name,
        search_args: args,
    })
}

pub fn execute_search(request: SearchRequest, filmography: &Filmography) -> SearchResult {
    let config = request.search_args.search_config();
    let (outcome, people_explored, search_duration) =
        find_path(filmography, &request.source, &request.target, &config);

    SearchResult {
        outcome,
        people_explored,
        search_duration,
        source: request.source,
        source_name: request.source_name,
        target_name: request.target_name,
        display_options: request.search_args,
    }
}

pub fn person_name(person_id: &PersonId, filmography: &Filmography) -> String {
    filmography
        .person(person_id)
        .map(|person| person.name.clone())
        .unwrap_or_else(|| person_id.to_string())
}
