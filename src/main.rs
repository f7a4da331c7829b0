use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use regex_extractor::{extract, Category, ExtractionResult};
use serde_json::json;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Extract emails, URLs, US phone numbers, times and hashtags from text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a text file (reads standard input when omitted)
    #[arg(index = 1)]
    file_path: Option<PathBuf>,

    /// Show only specific categories (comma-separated)
    #[arg(short, long)]
    categories: Option<String>,

    /// Exclude specific categories (comma-separated)
    #[arg(short, long)]
    exclude: Option<String>,

    /// Emit results as pretty-printed JSON instead of a report
    #[arg(short, long)]
    json: bool,

    /// Write JSON results to a file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Process line by line and write category statistics to outputstats.json
    #[arg(short, long)]
    stats: bool,
}

fn parse_category_list(list: &str) -> anyhow::Result<Vec<Category>> {
    list.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| Category::parse_label(s).with_context(|| format!("unknown category: {}", s)))
        .collect()
}

fn category_heading(category: Category) -> &'static str {
    match category {
        Category::Email => "EMAILS",
        Category::Url => "URLS",
        Category::PhoneUs => "PHONE NUMBERS",
        Category::Time12 => "TIMES (12-HOUR)",
        Category::Time24 => "TIMES (24-HOUR)",
        Category::Hashtag => "HASHTAGS",
    }
}

fn print_report(result: &ExtractionResult, shown: &[Category]) {
    let rule = ".".repeat(60);
    println!("{}", rule);
    println!("{}", "EXTRACTION RESULTS".bold());
    println!("{}\n", rule);

    for &category in shown {
        let found: Vec<_> = result.for_category(category).collect();
        println!(
            "{}: {} found ({} rejected)",
            category_heading(category).cyan().bold(),
            found.len(),
            result.rejected_count(category)
        );
        if found.is_empty() {
            println!("   (none found)");
        } else {
            for (i, m) in found.iter().enumerate() {
                println!("   {}. {}", i + 1, m.text);
            }
        }
        println!();
    }

    println!("{}", rule);
    println!("{}", "SUMMARY".bold());
    println!("{}", rule);
    println!("Total valid items: {}", result.total_valid());
    println!("Total rejected items: {}", result.total_rejected());
}

fn run_stats(text: &str, shown: &[Category]) -> anyhow::Result<()> {
    let lines: Vec<&str> = text.lines().collect();

    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({eta})")?
            .progress_chars("#>-"),
    );

    let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
    let mut total = 0usize;
    for (i, line) in lines.iter().enumerate() {
        let result = extract(line);
        for m in &result.matches {
            if shown.contains(&m.category) {
                *counts.entry(m.category).or_insert(0) += 1;
                total += 1;
            }
        }
        if i % 1000 == 0 {
            pb.set_position(i as u64);
        }
    }
    pb.finish_and_clear();

    // Sort categories by count (highest first)
    let mut sorted: Vec<_> = counts.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1));

    let mut category_stats: Vec<serde_json::Value> = Vec::new();
    for (category, count) in sorted {
        let percentage = if total > 0 {
            (*count as f64 / total as f64 * 100.0).round()
        } else {
            0.0
        };
        category_stats.push(json!({
            "category": category.label(),
            "count": count,
            "percentage": percentage,
        }));
    }

    let stats_json = json!({
        "summary": {
            "total_lines_processed": lines.len(),
            "total_matches": total,
        },
        "categories": category_stats,
    });

    fs::write("outputstats.json", serde_json::to_string_pretty(&stats_json)?)
        .context("failed to write outputstats.json")?;
    println!("Statistics written to outputstats.json");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let text = match &args.file_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read standard input")?;
            buf
        }
    };

    let included = args
        .categories
        .as_deref()
        .map(parse_category_list)
        .transpose()?;
    let excluded = args
        .exclude
        .as_deref()
        .map(parse_category_list)
        .transpose()?
        .unwrap_or_default();

    let shown: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|c| included.as_ref().map_or(true, |inc| inc.contains(c)))
        .filter(|c| !excluded.contains(c))
        .collect();

    if args.stats {
        return run_stats(&text, &shown);
    }

    let mut result = extract(&text);
    result.retain_categories(|c| shown.contains(&c));

    if args.json || args.output.is_some() {
        let json = serde_json::to_string_pretty(&result)?;
        match &args.output {
            Some(path) => {
                fs::write(path, &json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Results written to {}", path.display());
            }
            None => println!("{}", json),
        }
    } else {
        print_report(&result, &shown);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_list() {
        let categories = parse_category_list("email, url,hashtag").unwrap();
        assert_eq!(
            categories,
            vec![Category::Email, Category::Url, Category::Hashtag]
        );
    }

    #[test]
    fn test_parse_category_list_unknown() {
        assert!(parse_category_list("email,nope").is_err());
    }
}
