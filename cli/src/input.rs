//! Reading page text and writing records.

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use paraseg::model::FORM_FEED;
use paraseg::render::{self, JsonFormat};
use paraseg::{Page, ParagraphRecord};

/// Read a text dump from `path`, or stdin for `None` / `-`.
///
/// Invalid UTF-8 is replaced rather than rejected; the normalizer drops
/// anything outside ASCII anyway.
pub fn read_text(path: Option<&Path>) -> io::Result<String> {
    let bytes = match path {
        Some(p) if p != Path::new("-") => fs::read(p)?,
        _ => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read and split a text dump into pages.
pub fn read_pages(path: Option<&Path>, delimiter: Option<&str>) -> io::Result<Vec<Page>> {
    let text = read_text(path)?;
    let pages = Page::split_text(&text, delimiter.unwrap_or(FORM_FEED));
    log::debug!(
        "read {} pages from {}",
        pages.len(),
        path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
    );
    Ok(pages)
}

/// Write records to `output`, or stdout when `None`.
pub fn write_records(
    output: Option<&Path>,
    records: &[ParagraphRecord],
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            let file = fs::File::create(path)?;
            write_to(BufWriter::new(file), records, format)
        }
        None => write_to(io::stdout().lock(), records, format),
    }
}

fn write_to<W: Write>(
    mut writer: W,
    records: &[ParagraphRecord],
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        JsonFormat::Lines => render::write_json_lines(&mut writer, records)?,
        _ => {
            let json = render::to_json(records, format)?;
            writeln!(writer, "{}", json)?;
        }
    }
    writer.flush()?;
    Ok(())
}
