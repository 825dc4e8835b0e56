use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use wordsmith::config::Config;
use wordsmith::fetch::http::HttpContentFetcher;
use wordsmith::keywords::density::NgramDensityExtractor;
use wordsmith::keywords::research::KeywordResearch;
use wordsmith::keywords::stopwords::StopWords;
use wordsmith::keywords::traits::KeywordExtractor;
use wordsmith::output::terminal;
use wordsmith::plagiarism::checker::{CheckerSettings, PlagiarismChecker};
use wordsmith::rate_limiter::RateLimiter;
use wordsmith::search::google::GoogleSearchClient;
use wordsmith::text::case::CaseStyle;

/// Wordsmith: keyword density research and plagiarism checking for SEO copy.
///
/// Extracts the phrases that repeat across a page of search results, and
/// checks an article for overlap with pages already on the web.
#[derive(Parser)]
#[command(name = "wordsmith", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the keyword cache
    Init,

    /// Research the repeated phrases in search results for a term
    Keywords {
        /// The search term (e.g. "best running shoes")
        term: String,

        /// Number of phrases to show (default: 25)
        #[arg(long, default_value = "25")]
        limit: usize,

        /// Ignore the cache and search again
        #[arg(long)]
        refresh: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Keyword density of your own text (stdin or --file)
    Density {
        /// Read text from this file instead of stdin
        #[arg(long)]
        file: Option<String>,

        /// Also filter the full English stop-word list
        #[arg(long)]
        english_stopwords: bool,

        /// Number of phrases to show (default: 25)
        #[arg(long, default_value = "25")]
        limit: usize,

        /// Print the full density map as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check an article for plagiarism (stdin or --file, max 1000 words)
    Plagiarism {
        /// Read the article from this file instead of stdin
        #[arg(long)]
        file: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List cached keyword searches
    History,

    /// Word, character and paragraph counts
    Count {
        #[arg(long)]
        file: Option<String>,
    },

    /// Convert text case: upper, lower, sentence, title, toggle, alternating
    Case {
        style: CaseStyle,

        #[arg(long)]
        file: Option<String>,
    },

    /// MD5, SHA-1, SHA-256 and Base64 of the input
    Hash {
        #[arg(long)]
        file: Option<String>,
    },

    /// Start the HTTP API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 3000)
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays clean on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordsmith=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing keyword cache...");
            let config = Config::load()?;
            let cache = wordsmith::db::initialize_sqlite(&config.db_path)?;
            let table_count = cache.table_count().await?;
            println!("Keyword cache initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nNext step: set GOOGLE_SEARCH_API_KEY and GOOGLE_SEARCH_CX in .env");
            println!("  (see .env.example for required variables)");
            println!("\nThen run: wordsmith keywords \"your search term\"");
        }

        Commands::Keywords {
            term,
            limit,
            refresh,
            json,
        } => {
            let config = Config::load()?;
            config.require_search()?;
            let cache = wordsmith::db::initialize_sqlite(&config.db_path)?;
            let search = search_client(&config)?;
            let extractor = NgramDensityExtractor::default();

            let research = KeywordResearch::new(&search, &extractor, Some(cache.as_ref()));
            let outcome = research.research(&term, refresh).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                terminal::display_research(&outcome, limit);
                if outcome.cached {
                    println!(
                        "\n{}",
                        "Cached result. To search again, add --refresh.".dimmed()
                    );
                }
            }
        }

        Commands::Density {
            file,
            english_stopwords,
            limit,
            json,
        } => {
            let text = read_input(file.as_deref())?;
            if text.trim().is_empty() {
                return Err(wordsmith::error::TextError::EmptyInput.into());
            }

            let extractor = NgramDensityExtractor {
                stop_words: if english_stopwords {
                    StopWords::english()
                } else {
                    StopWords::seo()
                },
                ..NgramDensityExtractor::default()
            };
            let keywords = extractor.extract(&[text.as_str()]);

            if json {
                println!("{}", serde_json::to_string_pretty(&keywords)?);
            } else {
                println!(
                    "\n{}",
                    format!("=== Keyword Density ({} repeated phrases) ===", keywords.len()).bold()
                );
                terminal::display_keywords(&keywords, limit);
            }
        }

        Commands::Plagiarism { file, json } => {
            let config = Config::load()?;
            config.require_search()?;
            let article = read_input(file.as_deref())?;

            let search = search_client(&config)?;
            let fetcher = HttpContentFetcher::new()?;
            let pacer = RateLimiter::with_interval(config.request_interval());
            let settings = CheckerSettings {
                show_progress: !json,
                ..CheckerSettings::default()
            };

            if !json {
                println!("Checking article against the web...");
            }

            let checker = PlagiarismChecker::new(&search, &fetcher, &pacer, settings);
            let report = checker.check(&article).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_report(&report);
            }
        }

        Commands::History => {
            let config = Config::load()?;
            let cache = wordsmith::db::open_sqlite(&config.db_path)?;
            let searches = cache.list().await?;
            terminal::display_history(&searches);
        }

        Commands::Count { file } => {
            let text = read_input(file.as_deref())?;
            let stats = wordsmith::text::stats::analyze(&text);
            terminal::display_stats(&stats);
        }

        Commands::Case { style, file } => {
            let text = read_input(file.as_deref())?;
            print!("{}", wordsmith::text::case::convert(&text, style));
        }

        Commands::Hash { file } => {
            let text = read_input(file.as_deref())?;
            let digests = wordsmith::text::digest::generate(&text)?;
            terminal::display_digests(&digests);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            config.require_search()?;
            let cache = wordsmith::db::initialize_sqlite(&config.db_path)?;
            wordsmith::web::run_server(config, cache, port, &bind).await?;
        }
    }

    Ok(())
}

fn search_client(config: &Config) -> Result<GoogleSearchClient> {
    GoogleSearchClient::new(
        &config.search_url,
        config.search_api_key.clone(),
        config.search_cx.clone(),
    )
}

/// Read the whole input from a file, or from stdin when no file is given.
fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
