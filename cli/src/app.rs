use anyhow::{Context, bail};
use degrees_core::parsing::{MOVIES_FILE, PEOPLE_FILE, STARS_FILE};
use degrees_core::{Filmography, load_filmography};
use indicatif::{ProgressBar, ProgressStyle};
use std::{path::PathBuf, time::Duration};

pub struct DegreesApp {
    pub data_dir: PathBuf,
}

impl DegreesApp {
    pub fn new(data_dir: PathBuf) -> anyhow::Result<Self> {
        if !data_dir.is_dir() {
            bail!("Data path does not exist: {:?}", data_dir);
        }

        let missing: Vec<&str> = [PEOPLE_FILE, MOVIES_FILE, STARS_FILE]
            .into_iter()
            .filter(|file| !data_dir.join(file).exists())
            .collect();
        if !missing.is_empty() {
            bail!(
                "Data files not found in {:?}. Missing {}",
                data_dir,
                missing.join(", ")
            );
        }

        Ok(Self { data_dir })
    }

    pub fn load_data(&self, show_progress: bool) -> anyhow::Result<Filmography> {
        let spinner = show_progress.then(loading_spinner);

        let filmography = load_filmography(&self.data_dir)
            .with_context(|| format!("Failed to load dataset from {:?}", self.data_dir));

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        filmography
    }
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message("Loading data...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
