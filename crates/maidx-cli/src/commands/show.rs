//! Show command: detail view of one song.

use anyhow::Result;
use maidx_core::{Config, classify_song, format_song_console, generate_song_json};

use crate::cli_utils::{self, DataPaths};

pub fn run(paths: &DataPaths, config: &Config, id: &str, json: bool) -> Result<()> {
    let catalog = cli_utils::load_catalog(paths)?;
    let song = catalog.get(id)?;
    let detail = classify_song(song, catalog.stats());
    let cover_base_url = &config.display.cover_base_url;

    if json {
        println!(
            "{}",
            generate_song_json(&detail, catalog.stats(), cover_base_url)?
        );
    } else {
        print!(
            "{}",
            format_song_console(&detail, catalog.stats(), cover_base_url, true)
        );
    }

    Ok(())
}
