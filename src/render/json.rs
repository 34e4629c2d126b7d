//! JSON rendering for paragraph records.

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::ParagraphRecord;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed array with indentation
    #[default]
    Pretty,
    /// Compact array without extra whitespace
    Compact,
    /// One compact record per line
    Lines,
}

/// Render records as JSON in the given format.
pub fn to_json(records: &[ParagraphRecord], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(records),
        JsonFormat::Compact => serde_json::to_string(records),
        JsonFormat::Lines => return to_json_lines(records),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Render records as JSON Lines, one record per line.
pub fn to_json_lines(records: &[ParagraphRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_json_lines(&mut buf, records)?;
    String::from_utf8(buf).map_err(|e| Error::Render(format!("invalid UTF-8 output: {}", e)))
}

/// Stream records as JSON Lines into `writer`.
pub fn write_json_lines<W: Write>(mut writer: W, records: &[ParagraphRecord]) -> Result<()> {
    for record in records {
        write_json_line(&mut writer, record)?;
    }
    Ok(())
}

/// Write a single record as one JSON line.
pub fn write_json_line<W: Write>(mut writer: W, record: &ParagraphRecord) -> Result<()> {
    serde_json::to_writer(&mut writer, record)
        .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))?;
    writer.write_all(b"\n")?;
    Ok(())
}
