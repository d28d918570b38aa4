//! Highlight the search term in a text-layer dump
//!
//! Loads a JSON dump of rendered page text layers, runs one reconciliation
//! pass per page and reports where the term was found.
//!
//! Usage:
//!   cargo run --bin highlight_text_layer -- layers.json
//!   cargo run --bin highlight_text_layer -- layers.json --term dolor --color "#ffff00" --json
//!   cargo run --bin highlight_text_layer -- layers.json --config highlight.json --output marked.json

use pdf_highlight::annotation_types::HighlightColor;
use pdf_highlight::config::{HighlightConfig, LogLevel};
use pdf_highlight::document::TextLayerDocument;
use pdf_highlight::error::Result;
use pdf_highlight::layout::HighlightTarget;
use pdf_highlight::search::PassOutcome;
use std::path::PathBuf;

struct CliArgs {
    dump_path: PathBuf,
    config_path: Option<PathBuf>,
    term: Option<String>,
    color: Option<String>,
    output_path: Option<PathBuf>,
    json: bool,
    verbose: bool,
}

impl CliArgs {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        Self::parse(&args)
    }

    /// Parse an argv-style list; `args[0]` is the program name.
    fn parse(args: &[String]) -> Option<Self> {
        let mut dump_path = None;
        let mut config_path = None;
        let mut term = None;
        let mut color = None;
        let mut output_path = None;
        let mut json = false;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" => {
                    i += 1;
                    config_path = Some(PathBuf::from(Self::value(args, i)?));
                },
                "--term" => {
                    i += 1;
                    term = Some(Self::value(args, i)?.to_string());
                },
                "--color" => {
                    i += 1;
                    color = Some(Self::value(args, i)?.to_string());
                },
                "--output" | "-o" => {
                    i += 1;
                    output_path = Some(PathBuf::from(Self::value(args, i)?));
                },
                "--json" => json = true,
                "--verbose" | "-v" => verbose = true,
                other if !other.starts_with('-') && dump_path.is_none() => {
                    dump_path = Some(PathBuf::from(other));
                },
                other => {
                    eprintln!("Unknown argument: {}", other);
                    return None;
                },
            }
            i += 1;
        }

        Some(Self {
            dump_path: dump_path?,
            config_path,
            term,
            color,
            output_path,
            json,
            verbose,
        })
    }

    fn value(args: &[String], i: usize) -> Option<&str> {
        let value = args.get(i);
        if value.is_none() {
            eprintln!("Missing value for {}", args[i - 1]);
        }
        value.map(String::as_str)
    }

    fn load_config(&self) -> Result<HighlightConfig> {
        let mut config = match &self.config_path {
            Some(path) => HighlightConfig::from_json_file(path)?,
            None => HighlightConfig::default(),
        };
        if let Some(term) = &self.term {
            config = config.with_search_term(term.as_str());
        }
        if let Some(color) = &self.color {
            config = config.with_color(color.parse::<HighlightColor>()?);
        }
        if self.verbose && config.log_level < LogLevel::Debug {
            config = config.with_log_level(LogLevel::Debug);
        }
        Ok(config)
    }
}

fn print_outcome(doc: &TextLayerDocument, outcome: &PassOutcome) {
    let Some(m) = outcome.match_range else {
        println!("Page {}: no match", outcome.page + 1);
        return;
    };

    println!(
        "Page {}: '{}' at {}..{} ({} set, {} cleared, {} kept)",
        outcome.page + 1,
        outcome.matched_text.as_deref().unwrap_or_default(),
        m.start,
        m.end(),
        outcome.summary.set,
        outcome.summary.cleared,
        outcome.summary.unchanged
    );
    if let Some(bbox) = outcome.bbox {
        println!(
            "  Box: x={:.1} y={:.1} w={:.1} h={:.1}",
            bbox.x, bbox.y, bbox.width, bbox.height
        );
    }

    let Some(layer) = doc.page(outcome.page) else {
        return;
    };
    for fragment in layer.fragments() {
        let marker = if fragment.is_highlighted() { "*" } else { " " };
        println!("  {} [{}] {:?}", marker, fragment.order, fragment.text().unwrap_or_default());
    }
}

fn main() -> Result<()> {
    let Some(args) = CliArgs::from_args() else {
        eprintln!(
            "Usage: highlight_text_layer <dump.json> [--config <file>] [--term <text>] \
             [--color <css>] [--output <file>] [--json] [--verbose]"
        );
        std::process::exit(2);
    };

    let config = args.load_config()?;

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let mut doc = TextLayerDocument::open(&config, &args.dump_path)?;
    let outcomes = doc.highlight_all_pages();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        println!("Search term: '{}'", doc.searcher().search_term());
        println!("Highlight color: {}", config.color);
        println!("Pages: {}", doc.page_count());
        println!();
        for outcome in &outcomes {
            print_outcome(&doc, outcome);
        }
    }

    if let Some(output_path) = &args.output_path {
        std::fs::write(output_path, doc.to_json()?)?;
        log::info!("Wrote highlighted text layers to {}", output_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("highlight_text_layer")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_all_flags() {
        let args = CliArgs::parse(&argv(&[
            "layers.json",
            "--term",
            "dolor",
            "--color",
            "#ffff00",
            "--config",
            "cfg.json",
            "-o",
            "out.json",
            "--json",
            "-v",
        ]))
        .expect("valid arguments");

        assert_eq!(args.dump_path, PathBuf::from("layers.json"));
        assert_eq!(args.term.as_deref(), Some("dolor"));
        assert_eq!(args.color.as_deref(), Some("#ffff00"));
        assert_eq!(args.config_path, Some(PathBuf::from("cfg.json")));
        assert_eq!(args.output_path, Some(PathBuf::from("out.json")));
        assert!(args.json);
        assert!(args.verbose);
    }

    #[test]
    fn test_parse_trailing_flag_without_value() {
        for flag in ["--config", "--term", "--color", "--output", "-o"] {
            assert!(
                CliArgs::parse(&argv(&["layers.json", flag])).is_none(),
                "{} without a value should be rejected",
                flag
            );
        }
    }

    #[test]
    fn test_parse_requires_dump_path() {
        assert!(CliArgs::parse(&argv(&["--json"])).is_none());
        assert!(CliArgs::parse(&argv(&["a.json", "b.json"])).is_none());
    }
}
