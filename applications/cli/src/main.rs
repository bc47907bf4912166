/// Setlist - resolve song titles against Spotify and assemble the
/// matches into a new playlist
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use setlist_engine::{Manager, SelectionSet};
use setlist_spotify::SpotifyClient;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "setlist")]
#[command(about = "Build a Spotify playlist from a list of song titles", long_about = None)]
struct Cli {
    /// Playlist name; a generated one is used when omitted
    #[arg(short, long)]
    name: Option<String>,

    /// File with one song title per line; stdin when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Spotify API bearer token
    #[arg(long, env = "SPOTIFY_TOKEN", hide_env_values = true)]
    token: String,

    /// Maximum number of concurrent catalog lookups
    #[arg(long, default_value_t = 100)]
    concurrency: usize,

    /// Create the playlist without asking for confirmation
    #[arg(short = 'y', long)]
    yes: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setlist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let songs = read_songs(cli.file.as_deref())?;
    if songs.is_empty() {
        anyhow::bail!("no song titles supplied");
    }

    // stdin is consumed by the song list, so confirmation has nothing
    // left to read from
    if !cli.yes && cli.file.is_none() {
        anyhow::bail!("songs came from stdin, leaving nothing to confirm on; pass --yes or --file");
    }

    let name = cli.name.unwrap_or_else(default_name);

    let client = SpotifyClient::new(cli.token)?;
    let manager = Manager::new(client, cli.concurrency);

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let selection = Arc::new(SelectionSet::new(songs.len()));
    let recorder = Arc::clone(&selection);

    println!("Resolving {} song(s)...", songs.len());

    manager
        .gather(&cancel, &songs, move |index, query, matches| {
            let Some(track) = matches.first() else {
                println!("  [{index}] {query} -> not found");
                return;
            };

            match matches.len() - 1 {
                0 => println!("  [{index}] {query} -> {}", track.name),
                more => println!("  [{index}] {query} -> {} (+{more} more)", track.name),
            }

            if let Err(err) = recorder.add(index, track.clone()) {
                tracing::warn!(index, error = %err, "failed to record selection");
            }
        })
        .await
        .context("resolving songs")?;

    if selection.is_empty() {
        anyhow::bail!("none of the songs matched anything on the catalog");
    }

    println!(
        "Matched {} of {} song(s).",
        selection.len(),
        selection.capacity()
    );

    if !cli.yes && !confirm(&name, selection.len())? {
        println!("Aborted.");
        return Ok(());
    }

    manager
        .push(&cancel, &name, &selection.track_ids())
        .await
        .context("creating playlist")?;

    println!("Playlist \"{name}\" created.");
    Ok(())
}

/// One trimmed title per non-blank line, from the file or stdin.
fn read_songs(file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };

    Ok(parse_lines(&raw))
}

fn parse_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn default_name() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("setlist-{}", &suffix[..8])
}

fn confirm(name: &str, count: usize) -> anyhow::Result<bool> {
    print!("Create playlist \"{name}\" with {count} track(s)? [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
