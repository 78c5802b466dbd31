//! Soundify recommendation client - interactive terminal driver
//!
//! Stands in for the web view: login form, genre/mood selectors, search
//! box, and the song list, driven as line commands over stdin. All the
//! actual behavior lives in the library; this binary only parses commands
//! and prints state.

use anyhow::Result;
use clap::Parser;
use soundify_client::{ApiClient, AppState, Recommender};
use soundify_common::{config, Genre, Mood};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "soundify-client", about = "Terminal client for the Soundify recommendation API")]
struct Args {
    /// Base URL of the recommendation API
    #[arg(long)]
    api_url: Option<String>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = config::resolve_log_level(args.log_level.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&log_level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Soundify client v{}", env!("CARGO_PKG_VERSION"));

    let api_url = config::resolve_api_url(args.api_url.as_deref());
    info!("Recommendation API: {}", api_url);

    let api = ApiClient::new(&api_url)?;
    let state = Arc::new(AppState::new());
    let recommender = Recommender::new(api, Arc::clone(&state));

    run(recommender, state).await
}

async fn run(recommender: Recommender, state: Arc<AppState>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_help();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        // Split off the command word; the rest keeps its inner whitespace
        // so search queries pass through untouched.
        let trimmed = line.trim_end();
        let (command, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

        match command {
            "" => {}
            "login" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(username), Some(password)) => {
                        // Failures are already logged by the client; the
                        // view shows nothing beyond the unchanged list.
                        if recommender.login(username, password).await.is_ok() {
                            print_songs(&state).await;
                        }
                    }
                    _ => println!("usage: login <username> <password>"),
                }
            }
            "logout" => {
                recommender.logout().await;
            }
            "genre" => match parse_selection(rest, Genre::from_name) {
                Some(genre) => {
                    let _ = recommender.set_genre(genre).await;
                    print_songs(&state).await;
                }
                None => print_options("genres", Genre::ALL.map(|g| g.as_str())),
            },
            "mood" => match parse_selection(rest, Mood::from_name) {
                Some(mood) => {
                    let _ = recommender.set_mood(mood).await;
                    print_songs(&state).await;
                }
                None => print_options("moods", Mood::ALL.map(|m| m.as_str())),
            },
            "search" => {
                let _ = recommender.submit_search(rest).await;
                print_songs(&state).await;
            }
            "list" => print_songs(&state).await,
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command: {} (try 'help')", other),
        }
    }

    Ok(())
}

/// Parse a filter argument: "none" clears it, a known name selects it,
/// anything else is rejected (the caller prints the valid options)
fn parse_selection<T>(arg: &str, from_name: fn(&str) -> Option<T>) -> Option<Option<T>> {
    if arg == "none" {
        return Some(None);
    }
    from_name(arg).map(Some)
}

async fn print_songs(state: &AppState) {
    let songs = state.songs().await;
    if songs.is_empty() {
        println!("No songs available");
        return;
    }
    for song in songs {
        println!("  {} - {}", song.title, song.artist);
    }
}

fn print_options<const N: usize>(label: &str, options: [&str; N]) {
    println!("{}: none, {}", label, options.join(", "));
}

fn print_help() {
    println!("commands:");
    println!("  login <username> <password>   authenticate and fetch recommendations");
    println!("  logout                        forget the current identity");
    println!("  genre <name>|none             set or clear the genre filter");
    println!("  mood <name>|none              set or clear the mood filter");
    println!("  search <text>                 free-text search for songs");
    println!("  list                          show the current song list");
    println!("  quit                          exit");
}
