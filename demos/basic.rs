//! Example of parsing a BibTeX file
//!
//! Run with `cargo run --example basic --features serde -- refs.bib [--json]`.
//! Set `RUST_LOG=bibtex_entries=debug` to see what the parser is doing.

use bibtex_entries::{BibtexParser, Result};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <bibtex-file> [--json]", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];
    println!("Parsing {filename}...");

    let table = match BibtexParser::new().parse_file(filename) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if args.iter().any(|a| a == "--json") {
        match table.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Could not render JSON: {e}"),
        }
        return Ok(());
    }

    let stats = table.stats();
    println!("\nStatistics:");
    println!("  Entries: {}", stats.total_entries);

    println!("\nEntry types:");
    let mut types: Vec<_> = stats.entries_by_type.iter().collect();
    types.sort();
    for (ty, count) in types {
        println!("  {ty}: {count}");
    }

    // Newest first, the way bibliography pages usually list them
    println!("\nLatest entries (max 5):");
    let mut sorted = table.sorted_by("year");
    sorted.reverse();
    for (i, entry) in sorted.iter().take(5).enumerate() {
        println!("\n{}. {} ({})", i + 1, entry.key(), entry.entry_type());

        if let Some(author) = entry.get("author") {
            println!("   Author: {author}");
        }
        if let Some(title) = entry.get("title") {
            println!("   Title: {title}");
        }
        if let Some(year) = entry.get("year") {
            println!("   Year: {year}");
        }
    }

    Ok(())
}
