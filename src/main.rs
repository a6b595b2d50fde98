use anyhow::Result;
use clap::Parser;

mod catalog;
mod client;
mod config;
mod models;
mod playlist;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod playlist_tests;

use crate::catalog::Catalog;
use crate::client::OpenAiClient;
use crate::config::load_config;
use crate::models::MoodQuery;
use crate::playlist::filters::{MATCH_ALL_CATEGORY, SongFilters};
use crate::playlist::{
    MoodPlaylist, PlaylistConfig, PlaylistGenerator, PlaylistOutcome, SelectionStrategy,
};

#[derive(Parser)]
#[command(name = "moodlist")]
#[command(about = "Mood-based playlist generator for a local song catalog")]
#[command(version)]
struct Args {
    /// Free-form description of the mood to match
    #[arg(required_unless_present = "list_categories")]
    mood: Option<String>,

    /// Genre category to restrict the playlist to (see --list-categories)
    #[arg(short = 'c', long = "category", conflicts_with = "ai_genres")]
    category: Option<String>,

    /// Let the mood analysis pick genres from the catalog instead
    #[arg(long = "ai-genres")]
    ai_genres: bool,

    /// Extra genre preference passed along with --ai-genres
    #[arg(long = "genre-hint", requires = "ai_genres")]
    genre_hint: Option<String>,

    /// Number of songs to put in the playlist
    #[arg(short = 'n', long = "count", default_value_t = 5,
          value_parser = clap::value_parser!(u32).range(1..=10))]
    count: u32,

    /// Path to the song catalog CSV file
    #[arg(long = "catalog", default_value = "baza_piosenek.csv")]
    catalog: String,

    /// List the available genre categories and exit
    #[arg(long = "list-categories")]
    list_categories: bool,

    /// Print the playlist as JSON instead of text
    #[arg(long = "json")]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_categories {
        println!("Available categories:");
        for name in SongFilters::category_names() {
            println!("  {name}");
        }
        return Ok(());
    }

    let mood = args.mood.unwrap_or_default();
    let mood = mood.trim();
    if mood.is_empty() {
        eprintln!("Write something about your mood first!");
        return Err(anyhow::anyhow!("Mood description is empty"));
    }

    // Validate that the song catalog exists before proceeding
    if !std::path::Path::new(&args.catalog).exists() {
        eprintln!("Error: Song catalog file '{}' not found.", args.catalog);
        eprintln!("Please ensure the file exists or specify a different file with --catalog.");
        return Err(anyhow::anyhow!("Catalog file '{}' not found", args.catalog));
    }

    // Load configuration from .env
    let config = load_config()?;

    // Initialize API client
    let client = OpenAiClient::new(config);

    // Load the song catalog
    println!("Loading song catalog from '{}'...", args.catalog);
    let catalog = Catalog::load(std::path::Path::new(&args.catalog))?;
    if catalog.skipped_rows() > 0 {
        println!("Skipped {} malformed catalog rows", catalog.skipped_rows());
    }
    println!("Using {} songs for playlist generation", catalog.len());
    if catalog.is_empty() {
        eprintln!("Warning: catalog '{}' has no usable songs", args.catalog);
    }

    let query = match &args.genre_hint {
        Some(hint) => MoodQuery::with_genre_hint(mood, hint.as_str()),
        None => MoodQuery::new(mood),
    };
    let strategy = if args.ai_genres {
        SelectionStrategy::AiGenreSelection
    } else {
        SelectionStrategy::Category(
            args.category
                .unwrap_or_else(|| MATCH_ALL_CATEGORY.to_string()),
        )
    };

    // Analyze the mood and pick songs
    println!("\n🎵 Matching songs to your mood...");
    let generator = PlaylistGenerator::new(&client, PlaylistConfig::default());
    let outcome = generator.generate(&catalog, &query, &strategy, args.count as usize);

    match outcome {
        PlaylistOutcome::EmptyCategory { category } => {
            println!("No songs in the '{category}' category. Try another category.");
        }
        PlaylistOutcome::Playlist(playlist) => {
            if args.json {
                print_json(&playlist)?;
            } else {
                print_playlist(&playlist);
            }
        }
    }

    Ok(())
}

/// Print the playlist with the detected vibe and Spotify links
fn print_playlist(playlist: &MoodPlaylist) {
    if playlist.entries.is_empty() {
        println!("No songs match this mood. Try describing it differently.");
        return;
    }

    let banner = format!("Vibe: {}", playlist.target.diagnosis.to_uppercase());
    println!("\n{banner}");
    println!("{}", "=".repeat(banner.len()));
    println!(
        "Valence: {:.2} | Energy: {:.2} | Songs: {}",
        playlist.target.valence,
        playlist.target.energy,
        playlist.entries.len()
    );
    println!();

    for (i, entry) in playlist.entries.iter().enumerate() {
        let genre_display = entry.genre.as_deref().unwrap_or("unknown genre");
        println!(
            "{}. \"{}\" by {} [{}]",
            i + 1,
            entry.track_name,
            entry.artist,
            genre_display
        );
        println!("   Listen on Spotify: {}", entry.spotify_url);
    }
}

/// Print the playlist as a JSON document
fn print_json(playlist: &MoodPlaylist) -> Result<()> {
    let payload = serde_json::json!({
        "diagnosis": playlist.target.diagnosis,
        "valence": playlist.target.valence,
        "energy": playlist.target.energy,
        "songs": playlist.entries,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
