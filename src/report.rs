use crate::data_model::api::MessageRecord;
use std::io::{self, Write};

/// Messages shown per preview, regardless of how many were fetched.
pub const PREVIEW_LIMIT: usize = 5;

const SEPARATOR_WIDTH: usize = 50;

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Renders the first records between two separator lines.
pub fn write_message_preview(out: &mut impl Write, records: &[MessageRecord]) -> io::Result<()> {
    writeln!(out, "{}", separator())?;
    for (index, record) in records.iter().take(PREVIEW_LIMIT).enumerate() {
        writeln!(out, "{}", message_line(index, record))?;
    }
    writeln!(out, "{}", separator())?;
    Ok(())
}

pub fn message_line(index: usize, record: &MessageRecord) -> String {
    let id = record
        .id
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    let time = record.created_at.as_deref().unwrap_or("-");
    let text = record.message.as_deref().unwrap_or("-");
    format!("[{index}] ID: {id}, Time: {time}, Msg: {text}")
}
