//! Export surface: CSV serialization of the conversation log and the
//! plain-text report as downloadable artifacts.

use std::fs::{self, File};
use std::path::Path;

use chrono::Local;

use convo_types::conversation::Conversation;
use convo_types::{ConvoError, Result};

/// Write the full conversation log as CSV, one row per message
pub fn write_csv(path: &Path, conversation: &Conversation) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record([
            "id",
            "timestamp",
            "role",
            "text",
            "score",
            "label",
            "intent",
            "urgency",
            "worst_sentence",
        ])
        .map_err(csv_error)?;

    for message in conversation.messages() {
        writer
            .write_record([
                message.id.clone(),
                message.timestamp.clone(),
                message.role.to_string(),
                message.text.clone(),
                message.score.to_string(),
                message.label.to_string(),
                message.intent.to_string(),
                message.urgency.to_string(),
                message.worst_sentence.clone(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_report(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report)?;
    Ok(())
}

/// Default export file name: `<prefix>_<YYYYmmdd_HHMMSS>.<ext>`
pub fn default_export_name(prefix: &str, ext: &str) -> String {
    format!("{}_{}.{}", prefix, Local::now().format("%Y%m%d_%H%M%S"), ext)
}

fn csv_error(e: csv::Error) -> ConvoError {
    ConvoError::Export(e.to_string())
}
