use degrees_core::{Algorithm, Filmography, PathStep, PersonId, SearchOutcome, WorkId};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🎬 Finding path from {} to {}",
        colors.person_name(&format!("\"{}\"", request.source_name)),
        colors.person_name(&format!("\"{}\"", request.target_name))
    );

    let config = request.search_args.search_config();
    match config.algorithm {
        Algorithm::Bfs => println!("⚙️  Using shortest path search (BFS)"),
        Algorithm::Dfs => println!("⚙️  Using depth-first search (DFS), path may not be the shortest"),
    }

    if let Some(limit) = config.max_expansions {
        println!(
            "⏱️  Giving up after {} expansions",
            colors.number(&format_number(limit))
        );
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(
    result: SearchResult,
    filmography: &Filmography,
    colors: &ColorScheme,
) {
    let is_verbose = result.display_options.verbose;

    if is_verbose {
        println!("\n---\n");
    }

    match &result.outcome {
        SearchOutcome::Found(path) => {
            display_successful_path(path, &result, filmography, colors);
        }
        SearchOutcome::NotConnected => {
            println!("{}", colors.error("Not connected."));
        }
        SearchOutcome::LimitReached => {
            println!(
                "{} {} and {}",
                colors.error("❌ Search limit reached before connecting"),
                colors.person_name(&format!("\"{}\"", result.source_name)),
                colors.person_name(&format!("\"{}\"", result.target_name))
            );
        }
    }

    if is_verbose {
        display_search_statistics(result.people_explored, result.search_duration, colors);
    }
}

fn display_successful_path(
    path: &[PathStep],
    result: &SearchResult,
    filmography: &Filmography,
    colors: &ColorScheme,
) {
    println!("{}", format_degrees(path.len(), colors));

    if result.display_options.quiet {
        return;
    }

    for line in format_path_lines(path, &result.source, filmography, &result.display_options, colors) {
        println!("{}", line);
    }
}

pub fn format_degrees(degrees: usize, colors: &ColorScheme) -> String {
    colors
        .success(&format!("{} degrees of separation.", degrees))
        .to_string()
}

/// One "`n`: A and B starred in M" line per step, starting from `source`.
pub fn format_path_lines(
    path: &[PathStep],
    source: &PersonId,
    filmography: &Filmography,
    display_options: &Args,
    colors: &ColorScheme,
) -> Vec<String> {
    let mut previous = source;

    path.iter()
        .enumerate()
        .map(|(step_index, step)| {
            let line = format!(
                "{}: {} and {} starred in {}",
                colors.step_number(&(step_index + 1).to_string()),
                format_person(previous, filmography, display_options, colors),
                format_person(&step.person_id, filmography, display_options, colors),
                format_work(&step.work_id, filmography, display_options, colors)
            );
            previous = &step.person_id;
            line
        })
        .collect()
}

fn format_person(
    person_id: &PersonId,
    filmography: &Filmography,
    display_options: &Args,
    colors: &ColorScheme,
) -> String {
    let name = filmography
        .person(person_id)
        .map_or(person_id.as_str(), |person| person.name.as_str());
    let mut formatted = colors.person_name(name).to_string();

    if display_options.show_ids {
        formatted.push_str(&format!(" {}", colors.id(&format!("[{}]", person_id))));
    }

    formatted
}

fn format_work(
    work_id: &WorkId,
    filmography: &Filmography,
    display_options: &Args,
    colors: &ColorScheme,
) -> String {
    let title = filmography
        .work(work_id)
        .map_or(work_id.as_str(), |work| work.title.as_str());
    let mut formatted = colors.work_title(title).to_string();

    if display_options.show_ids {
        formatted.push_str(&format!(" {}", colors.id(&format!("[{}]", work_id))));
    }

    formatted
}

fn display_search_statistics(people_explored: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} people in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(people_explored)),
        colors.number(&format!("{:.3}", search_duration))
    );
}
