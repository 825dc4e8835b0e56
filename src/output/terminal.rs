// Colored terminal output for keyword tables, plagiarism reports and the
// text tools.
//
// This module handles all terminal-specific formatting: colors, tables,
// bars. The main.rs command handlers delegate here.

use colored::Colorize;

use crate::db::models::CachedSearch;
use crate::keywords::density::{rank_by_density, KeywordDensity};
use crate::keywords::research::ResearchOutcome;
use crate::plagiarism::report::PlagiarismReport;
use crate::text::digest::Digests;
use crate::text::stats::TextStats;

/// Display the header of a keyword research result, then its table.
pub fn display_research(outcome: &ResearchOutcome, limit: usize) {
    println!("\n{}", format!("=== {} ===", outcome.title).bold());
    let source = if outcome.cached {
        format!(
            "cached {}",
            outcome.cached_at.as_deref().unwrap_or("earlier")
        )
    } else {
        format!("live search, {:.2}s", outcome.search_time)
    };
    println!(
        "  Total results: {}  |  Repeated phrases: {}  |  {}",
        outcome.total_results,
        outcome.keyword_count,
        source.dimmed()
    );
    display_keywords(&outcome.keywords, limit);
}

/// Display the top `limit` phrases by density.
pub fn display_keywords(keywords: &KeywordDensity, limit: usize) {
    if keywords.is_empty() {
        println!("\n  No repeated phrases found.");
        return;
    }

    println!();
    println!(
        "  {:>4}  {:<40} {:>5}  {:>8}  {:>5}",
        "Rank".dimmed(),
        "Phrase".dimmed(),
        "Count".dimmed(),
        "Density".dimmed(),
        "Words".dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());

    for (i, (phrase, stats)) in rank_by_density(keywords).into_iter().take(limit).enumerate() {
        let shown = super::truncate_chars(phrase, 40);
        println!(
            "  {:>4}. {:<40} {:>5}  {:>7.2}%  {:>5}",
            i + 1,
            shown,
            stats.count,
            stats.density,
            stats.word_count,
        );
    }

    if keywords.len() > limit {
        println!(
            "  {}",
            format!("... and {} more", keywords.len() - limit).dimmed()
        );
    }
}

/// Display a plagiarism report, one block per snippet.
pub fn display_report(report: &PlagiarismReport) {
    println!("\n{}", "=== Plagiarism Report ===".bold());
    println!(
        "  Overall similarity: {}",
        colorize_score(report.overall_score)
    );
    println!(
        "  Snippets searched: {}/{}  |  Sources checked: {}",
        report.snippets_searched, report.snippets_total, report.sources_checked
    );

    if report.snippets_searched < report.snippets_total {
        println!(
            "  {}",
            "Some snippets returned no search results and are not included in the score."
                .yellow()
        );
    }

    for snippet in &report.snippets {
        println!(
            "\n  {} {}",
            format!("Snippet {}", snippet.snippet_index + 1).bold(),
            colorize_score(snippet.max_similarity)
        );
        println!(
            "    \"{}\"",
            super::truncate_chars(&snippet.original_snippet, 100).dimmed()
        );
        if snippet.sources.is_empty() {
            println!("    {}", "No candidate pages could be fetched.".dimmed());
        }
        for source in &snippet.sources {
            let title = if source.title.is_empty() {
                source.url.as_str()
            } else {
                source.title.as_str()
            };
            println!(
                "    {:>7}  {}",
                format!("{:.2}%", source.similarity),
                super::truncate_chars(title, 70)
            );
            println!("             {}", source.url.dimmed());
        }
    }
    println!();
}

/// Display word counter statistics.
pub fn display_stats(stats: &TextStats) {
    println!("\n{}", "=== Text Statistics ===".bold());
    println!("  Words:                {}", stats.words);
    println!("  Characters:           {}", stats.characters);
    println!("  Characters (no ws):   {}", stats.characters_no_spaces);
    println!("  Paragraphs:           {}", stats.paragraphs);
    println!("  Lines:                {}", stats.lines);
    println!(
        "  Reading time:         {} min",
        stats.reading_time_minutes
    );
}

/// Display generated digests.
pub fn display_digests(digests: &Digests) {
    println!("  {:<7} {}", "MD5".dimmed(), digests.md5);
    println!("  {:<7} {}", "SHA-1".dimmed(), digests.sha1);
    println!("  {:<7} {}", "SHA-256".dimmed(), digests.sha256);
    println!("  {:<7} {}", "Base64".dimmed(), digests.base64);
}

/// Display the cached keyword searches.
pub fn display_history(searches: &[CachedSearch]) {
    if searches.is_empty() {
        println!("No cached searches yet. Run `wordsmith keywords <term>` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Cached Searches ({}) ===", searches.len()).bold()
    );
    println!();
    for search in searches {
        println!(
            "  {:<40} {:>5} phrases  {}",
            super::truncate_chars(&search.search_query, 40),
            search.keywords.len(),
            search.created_at.dimmed()
        );
    }
}

/// Color a similarity percentage: green below 20, yellow below 50, red above.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:.2}%");
    if score >= 50.0 {
        text.red().bold()
    } else if score >= 20.0 {
        text.yellow()
    } else {
        text.green()
    }
}
