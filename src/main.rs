//! Interactive shell around the MoodLens engine.
//!
//! Commands are read line by line from stdin; every failure is reported and
//! leaves the session running.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use moodlens::dataset::{parse_dataset, DatasetFormat, ParserConfig};
use moodlens::discover::{shuffled_selection, QuoteCategory};
use moodlens::metrics::{counts_by_emotion, trend_series, DEFAULT_TREND_WINDOW};
use moodlens::{Database, DetectionController, KeywordClassifier, ModelSlot, Trainer};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("MoodLens starting up...");

    let data_dir = std::env::var("MOODLENS_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

    let db_path = data_dir.join("moodlens.sqlite3");
    let database = Database::new(db_path)?;

    let detector = DetectionController::new(Arc::new(KeywordClassifier::new()), database.clone());
    detector.initialize().await?;

    let trainer = Trainer::new(database.clone());

    println!("MoodLens ready. Type 'help' for commands.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "help" => print_help(),
            "analyze" => run_analyze(&detector, rest).await,
            "history" => run_history(&database).await,
            "stats" => run_stats(&database).await,
            "trend" => run_trend(&database).await,
            "clear" => run_clear(&database).await,
            "train" => run_train(&trainer, rest).await,
            "model" => run_model(&database).await,
            "discover" => run_discover(rest),
            "quit" | "exit" => break,
            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }

        io::stdout().flush().ok();
    }

    log::info!("MoodLens shutting down");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  analyze <text>              run emotion detection on <text>");
    println!("  history                     list stored analyses (newest last)");
    println!("  stats                       per-emotion counts across history");
    println!("  trend                       probability trend over recent entries");
    println!("  clear                       erase the stored history");
    println!("  train <file> [--semicolon]  simulate training on a dataset file");
    println!("  model                       show the saved custom model, if any");
    println!("  discover [emotion]          curated quotes, optionally filtered");
    println!("  quit                        exit");
}

async fn run_analyze(detector: &DetectionController, text: &str) {
    if text.is_empty() {
        println!("Usage: analyze <text>");
        return;
    }

    match detector.detect(text).await {
        Ok(record) => {
            println!(
                "{} ({:.1}% confident)",
                record.result.prediction,
                record.result.confidence_percent()
            );
            for score in &record.result.probabilities {
                println!("  {:10} {:5.1}%", score.emotion, score.probability * 100.0);
            }
        }
        Err(err) => println!("Emotion detection failed: {err:#}"),
    }
}

async fn run_history(database: &Database) {
    match database.load_history().await {
        Ok(history) if history.is_empty() => println!("No analyses yet."),
        Ok(history) => {
            for record in &history {
                println!(
                    "[{}] {} -> {} ({:.1}%)",
                    record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    truncate(&record.text, 48),
                    record.result.prediction,
                    record.result.confidence_percent()
                );
            }
        }
        Err(err) => println!("Could not load history: {err}"),
    }
}

async fn run_stats(database: &Database) {
    match database.load_history().await {
        Ok(history) => {
            let counts = counts_by_emotion(&history);
            if counts.is_empty() {
                println!("No analyses yet.");
                return;
            }
            for count in counts {
                println!("{:10} {}", count.name, count.value);
            }
        }
        Err(err) => println!("Could not load history: {err}"),
    }
}

async fn run_trend(database: &Database) {
    match database.load_history().await {
        Ok(history) => {
            let series = trend_series(&history, DEFAULT_TREND_WINDOW);
            if series.is_empty() {
                println!("No analyses yet.");
                return;
            }
            for entry in series {
                let points: Vec<String> = entry
                    .points
                    .iter()
                    .map(|point| format!("{} {:.0}%", point.emotion, point.value))
                    .collect();
                println!("{}: {}", entry.name, points.join(", "));
            }
        }
        Err(err) => println!("Could not load history: {err}"),
    }
}

async fn run_clear(database: &Database) {
    match database.clear_history().await {
        Ok(()) => println!("History cleared."),
        Err(err) => println!("Could not clear history: {err}"),
    }
}

async fn run_train(trainer: &Trainer, args: &str) {
    let mut parts = args.split_whitespace();
    let path = match parts.next() {
        Some(path) => path,
        None => {
            println!("Usage: train <file> [--semicolon]");
            return;
        }
    };

    let config = if parts.any(|flag| flag == "--semicolon") {
        ParserConfig {
            format: DatasetFormat::SemicolonLabelFirst,
            lowercase_labels: false,
        }
    } else {
        ParserConfig::default()
    };

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            println!("Could not read {path}: {err}");
            return;
        }
    };

    let file_name = std::path::Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    let dataset = match parse_dataset(&raw, &file_name, &config) {
        Ok(dataset) => dataset,
        Err(err) => {
            println!("Dataset error: {err}");
            return;
        }
    };

    println!(
        "Loaded {} examples with {} emotions: {}",
        dataset.example_count(),
        dataset.label_vocabulary.len(),
        dataset.label_vocabulary.join(", ")
    );

    let outcome = trainer
        .train(&dataset, |progress| {
            println!(
                "Epoch {} - loss {:.4}, accuracy {:.2}% ({:.0}%)",
                progress.stats.epoch,
                progress.stats.loss,
                progress.stats.accuracy * 100.0,
                progress.percent
            );
        })
        .await;

    match outcome {
        Ok(report) => println!("Training complete. Saved model {}.", report.metadata.name),
        Err(err) => println!("Training failed: {err:#}"),
    }
}

async fn run_model(database: &Database) {
    match database.load_model_metadata(ModelSlot::Custom).await {
        Ok(Some(metadata)) => {
            println!("Custom model: {}", metadata.name);
            println!("  dataset:  {}", metadata.dataset);
            println!("  examples: {}", metadata.examples);
            println!("  labels:   {}", metadata.labels.join(", "));
            println!("  created:  {}", metadata.created.to_rfc3339());
        }
        Ok(None) => println!("No custom model trained yet."),
        Err(err) => println!("Could not load model metadata: {err}"),
    }
}

fn run_discover(emotion: &str) {
    let filter = if emotion.is_empty() { None } else { Some(emotion) };
    let mut rng = rand::thread_rng();

    for (title, category) in [
        ("Quotes", QuoteCategory::Quotes),
        ("Movies", QuoteCategory::Movies),
        ("Songs", QuoteCategory::Songs),
    ] {
        let selection = shuffled_selection(category, filter, &mut rng);
        println!("{title}:");
        if selection.is_empty() {
            println!("  (nothing for this emotion)");
            continue;
        }
        for quote in selection {
            println!(
                "  \"{}\" - {} [{} {:.0}%]",
                quote.text,
                quote.attribution,
                quote.emotion,
                quote.emotion_score * 100.0
            );
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let prefix: String = text.chars().take(max_chars).collect();
    format!("{prefix}…")
}
