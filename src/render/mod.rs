//! Output-side helpers: record serialization, page selection and statistics.

mod json;
mod selection;
mod stats;

pub use json::{to_json, to_json_lines, write_json_line, write_json_lines, JsonFormat};
pub use selection::PageSelection;
pub use stats::SegmentStats;
