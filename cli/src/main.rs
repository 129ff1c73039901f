use clap::Parser;
use degrees::colors::ColorScheme;
use degrees::display::{display_search_info, display_search_results};
use degrees::json_output::{create_json_output, print_json_output};
use degrees::{Args, DegreesApp, create_search_request, execute_search};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    let search_args = Args::parse();
    init_logging(search_args.verbose);
    let colors = ColorScheme::new(!search_args.no_color && !search_args.json);

    if let Err(error) = run(search_args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {:#}", error)));
        std::process::exit(1);
    }
}

fn run(search_args: Args, colors: &ColorScheme) -> anyhow::Result<()> {
    let app = DegreesApp::new(search_args.data.clone())?;
    let show_progress = !search_args.quiet && !search_args.json;
    let filmography = app.load_data(show_progress)?;

    // Disambiguation prompts go to stderr so stdout only carries the result
    let mut input = io::stdin().lock();
    let mut prompt = io::stderr();
    let search_request = create_search_request(search_args, &filmography, &mut input, &mut prompt)?;

    let json = search_request.search_args.json;
    if search_request.search_args.verbose && !json {
        display_search_info(&search_request, colors);
    }

    let search_result = execute_search(search_request, &filmography);

    if json {
        print_json_output(&create_json_output(&search_result, &filmography));
    } else {
        display_search_results(search_result, &filmography, colors);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}
