//! CLI tool for generating branded slide decks from a topic.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::OutlineParser;
use deck_llm::{outline_prompt, ChatClient, DEFAULT_MODEL};
use deck_pptx::DeckRenderer;
use deck_search::SearchClient;
use std::path::PathBuf;

/// Generate a branded PowerPoint deck for a topic from web search context.
#[derive(Parser, Debug)]
#[command(name = "autodeck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Topic to build the deck around (quote it if it contains spaces)
    topic: Option<String>,

    /// Output file (default: <topic>_Branded_Deck.pptx in the working directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Brand label stamped in each slide footer
    #[arg(long, default_value = "AutoDeck AI")]
    brand: String,

    /// Maximum number of search results to collect
    #[arg(short = 'n', long, default_value = "5")]
    results: usize,

    /// Print the raw model outline to stdout before rendering
    #[arg(long)]
    print_outline: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    // The usage contract promises exit code 1 when the topic is missing,
    // so the positional is checked by hand instead of through clap.
    let Some(topic) = args.topic.clone() else {
        eprintln!("Usage: autodeck '<topic>'");
        std::process::exit(1);
    };

    run(&topic, &args)
}

/// Run the search -> outline -> deck pipeline for one topic.
fn run(topic: &str, args: &Args) -> Result<()> {
    println!("Searching web for: {}", topic);
    let hits = SearchClient::new()
        .search(topic, args.results)
        .context("Web search failed")?;
    log::debug!("Collected {} snippets", hits.len());

    let snippets = hits
        .iter()
        .map(|hit| hit.snippet())
        .collect::<Vec<_>>()
        .join("\n");

    println!("Generating outline for: {}", topic);
    let client = ChatClient::new(DEFAULT_MODEL).context("Chat client setup failed")?;
    let outline = client
        .complete(&outline_prompt(topic, &snippets))
        .context("Outline generation failed")?;

    if args.print_outline {
        println!("{}", outline);
    }

    let records = OutlineParser::new().parse(&outline);
    log::debug!("Parsed {} slide records", records.len());

    println!("Building branded deck...");
    let deck = DeckRenderer::new(args.brand.as_str()).render(&records);

    let output_path = output_path(topic, args.output.as_ref());
    deck.save_to(&output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("Branded slide deck saved as {}", output_path.display());
    Ok(())
}

/// Determine the output path for the deck file.
fn output_path(topic: &str, output: Option<&PathBuf>) -> PathBuf {
    match output {
        Some(path) => path.clone(),
        None => PathBuf::from(format!("{}_Branded_Deck.pptx", topic.replace(' ', "_"))),
    }
}
