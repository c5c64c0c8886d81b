//! Crypto World CLI
//!
//! Terminal view of the landing page content plus the two pieces of state the
//! desktop app owns: the theme preference and the newsletter form.
//!
//! ## Usage
//!
//! ```bash
//! # Market overview (add --json for machine-readable output)
//! cryptoworld markets
//!
//! # Search the glossary
//! cryptoworld glossary defi
//!
//! # Inspect or change the saved theme
//! cryptoworld theme show
//! cryptoworld theme toggle
//! cryptoworld theme set light
//!
//! # Subscribe to the newsletter
//! cryptoworld subscribe you@example.com
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cryptoworld_core::content::{
    BLOG_POSTS, BRAND_NAME, NEWS_ARTICLES, TICKERS, TOPIC_CARDS, TRENDING,
};
use cryptoworld_core::{
    EmailAddress, GlossarySearch, Newsletter, Preferences, Theme, ThemeState,
};

/// Crypto World - market, learning and news content from the terminal
#[derive(Parser)]
#[command(name = "cryptoworld")]
#[command(version = "0.1.0")]
#[command(about = "Crypto World - your gateway to the world of cryptocurrency")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: platform data dir + /cryptoworld)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the market overview cards
    Markets {
        /// Print the tickers as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the "Trending Now" list
    Trending,

    /// Search the crypto glossary (case-insensitive, term or definition)
    Glossary {
        /// Search text; lists every term when omitted
        query: Option<String>,
    },

    /// List the educational topics
    Topics,

    /// Show the latest news
    News,

    /// Show the featured blog articles
    Blog,

    /// Theme preference management
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Subscribe an email address to the newsletter
    Subscribe {
        /// Email address to subscribe
        email: String,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the saved theme
    Show,
    /// Flip between dark and light
    Toggle,
    /// Save a specific theme
    Set {
        /// "dark" or "light"
        theme: String,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Same location the desktop app uses, so both share one preference file.
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cryptoworld")
}

fn open_theme(data_dir: &Path) -> Result<ThemeState> {
    let prefs = Preferences::open_in(data_dir).with_context(|| {
        format!("Failed to open preferences in {}", data_dir.display())
    })?;
    Ok(ThemeState::load(Some(prefs)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "starting");

    match cli.command {
        Commands::Markets { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(TICKERS)?);
            } else {
                println!("{} - Market Overview", BRAND_NAME);
                println!();
                for ticker in TICKERS {
                    let arrow = if ticker.trend().is_up() { "+" } else { "-" };
                    println!(
                        "  {:<5} {:<10} {:>12}  {}{}",
                        ticker.symbol,
                        ticker.name,
                        ticker.formatted_price(),
                        arrow,
                        ticker.change_label()
                    );
                    println!(
                        "        Market Cap: ${}  Volume: ${}",
                        ticker.market_cap, ticker.volume
                    );
                }
            }
        }

        Commands::Trending => {
            println!("Trending Now");
            for (rank, item) in TRENDING.iter().enumerate() {
                println!(
                    "  #{} {:<6} {:>10}  {}",
                    rank + 1,
                    item.symbol,
                    item.price,
                    item.change
                );
            }
        }

        Commands::Glossary { query } => {
            let search = GlossarySearch::run(query.unwrap_or_default());
            if search.is_empty() {
                println!("{}", search.empty_message());
            } else {
                for term in search.matches() {
                    println!("{}", term.term);
                    println!("  {}", term.definition);
                }
            }
        }

        Commands::Topics => {
            for (index, topic) in TOPIC_CARDS.iter().enumerate() {
                println!("{}. {}", index + 1, topic.title);
                println!("   {}", topic.description);
            }
        }

        Commands::News => {
            for article in NEWS_ARTICLES {
                println!("[{}] {}", article.category, article.title);
                println!("  {}", article.excerpt);
                println!("  {} - {}", article.source, article.age_label());
                println!();
            }
        }

        Commands::Blog => {
            for post in BLOG_POSTS {
                let marker = if post.featured { " (Featured)" } else { "" };
                println!("{}{}", post.title, marker);
                println!(
                    "  {} - {} - {}",
                    post.author,
                    post.date_label(),
                    post.read_time_label()
                );
                println!("  Tags: {}", post.tags.join(", "));
            }
        }

        Commands::Theme { action } => match action {
            ThemeAction::Show => {
                let state = open_theme(&data_dir)?;
                println!("Theme: {}", state.theme());
            }
            ThemeAction::Toggle => {
                let mut state = open_theme(&data_dir)?;
                let theme = state.toggle();
                println!("Theme: {}", theme);
            }
            ThemeAction::Set { theme } => {
                let theme: Theme = theme.parse()?;
                let mut state = open_theme(&data_dir)?;
                state.set(theme);
                println!("Theme: {}", theme);
            }
        },

        Commands::Subscribe { email } => {
            // No browser input here to vet the address, so check it up front
            let address = EmailAddress::parse(&email)
                .with_context(|| format!("Could not subscribe {:?}", email))?;

            println!("Subscribing...");
            let subscription = Newsletter::new()
                .subscribe(address.as_str())
                .await
                .with_context(|| format!("Could not subscribe {:?}", email))?;
            println!("{}", subscription.message());
        }
    }

    Ok(())
}
