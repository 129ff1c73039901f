use degrees_core::{Filmography, PathStep, SearchOutcome};
use serde::{Deserialize, Serialize};

use crate::search::{SearchResult, person_name};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    pub limit_reached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degrees: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonStep>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStep {
    pub movie_id: String,
    pub movie_title: String,
    pub person_id: String,
    pub person_name: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub people_explored: usize,
}

pub fn create_json_output(result: &SearchResult, filmography: &Filmography) -> JsonOutput {
    let path = result.outcome.path();
    let json_path = path.map(|steps| {
        steps
            .iter()
            .map(|step| create_json_step(step, filmography))
            .collect()
    });
    let config = result.display_options.search_config();

    JsonOutput {
        query: JsonQuery {
            from: result.source_name.clone(),
            to: result.target_name.clone(),
            options: JsonOptions {
                algorithm: config.algorithm.as_str().to_string(),
                max_expansions: config.max_expansions,
            },
        },
        result: JsonResult {
            found: path.is_some(),
            limit_reached: matches!(result.outcome, SearchOutcome::LimitReached),
            degrees: path.map(<[PathStep]>::len),
            path: json_path,
        },
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            people_explored: result.people_explored,
        },
    }
}

fn create_json_step(step: &PathStep, filmography: &Filmography) -> JsonStep {
    let movie_title = filmography
        .work(&step.work_id)
        .map(|work| work.title.clone())
        .unwrap_or_else(|| step.work_id.to_string());

    JsonStep {
        movie_id: step.work_id.to_string(),
        movie_title,
        person_id: step.person_id.to_string(),
        person_name: person_name(&step.person_id, filmography),
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
