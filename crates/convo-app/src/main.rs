//! convoscope — conversation sentiment analytics for customer-service chats.
//!
//! Composition root: wires the polarity scorer, config, and reply
//! strategy into a session engine, feeds it a transcript (file or
//! stdin), prints per-message analysis and escalation alerts, and
//! writes the CSV / report exports.

mod export;

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;

use convo_core::session::SessionEngine;
use convo_types::config::AnalyzerConfig;
use convo_types::Result;

#[derive(Parser, Debug)]
#[command(
    name = "convoscope",
    about = "Analyze customer-service chat transcripts: sentiment, intent, urgency, escalation"
)]
struct Cli {
    /// Transcript file with one user message per line; reads stdin when
    /// omitted (`:reset` clears the conversation, `:quit` exits)
    transcript: Option<PathBuf>,

    /// Consecutive negative user messages that flag an escalation (2-6)
    #[arg(long, default_value_t = 3)]
    window: usize,

    /// Trailing window for the sentiment trend moving average
    #[arg(long, default_value_t = 3)]
    trend_window: usize,

    /// How many top negative messages the report lists
    #[arg(long, default_value_t = 3)]
    top_k: usize,

    /// Write the conversation log as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the text report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Export CSV and report with timestamped default file names
    #[arg(long)]
    export: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = AnalyzerConfig {
        escalation_window: cli.window,
        trend_window: cli.trend_window,
        top_k: cli.top_k,
    };
    let mut engine = SessionEngine::new(config)?;
    log::info!("session started, escalation window {}", cli.window);

    match &cli.transcript {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            for line in content.lines() {
                handle_line(&mut engine, line);
            }
        }
        None => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                match line.trim() {
                    ":quit" => break,
                    ":reset" => {
                        engine.reset();
                        println!("(conversation reset)");
                    }
                    text => handle_line(&mut engine, text),
                }
            }
        }
    }

    println!();
    println!("{}", engine.report());

    let trend = engine.trend();
    if !trend.is_empty() {
        let formatted: Vec<String> = trend.iter().map(|v| format!("{:.3}", v)).collect();
        println!("Sentiment trend: {}", formatted.join(" -> "));
    }

    let csv_path = cli
        .csv
        .or_else(|| pick_default(cli.export, "conversation", "csv"));
    if let Some(path) = csv_path {
        export::write_csv(&path, engine.conversation())?;
        log::info!("wrote CSV export to {}", path.display());
        println!("CSV written to {}", path.display());
    }

    let report_path = cli
        .report
        .or_else(|| pick_default(cli.export, "report", "txt"));
    if let Some(path) = report_path {
        export::write_report(&path, &engine.report())?;
        log::info!("wrote report to {}", path.display());
        println!("Report written to {}", path.display());
    }

    Ok(())
}

/// Analyze one user line and print the turn
fn handle_line(engine: &mut SessionEngine, text: &str) {
    let text = text.trim();
    if text.is_empty() {
        return;
    }

    let turn = engine.submit(text);
    println!(
        "user  [{} {:+.3} | intent: {} | urgency: {:.2}] {}",
        turn.user.label, turn.user.score, turn.user.intent, turn.user.urgency, turn.user.text
    );
    if !turn.user.worst_sentence.is_empty() && turn.user.worst_sentence != turn.user.text {
        println!("      worst sentence: \"{}\"", turn.user.worst_sentence);
    }
    println!("agent [{}] {}", turn.agent.label, turn.agent.text);

    if turn.escalated {
        println!(
            "!! escalation: customer negative for {}+ consecutive messages",
            engine.config().escalation_window
        );
    }
}

fn pick_default(export: bool, prefix: &str, ext: &str) -> Option<PathBuf> {
    export.then(|| PathBuf::from(export::default_export_name(prefix, ext)))
}
