//! Data model for segmentation input and output.
//!
//! Pages go in, paragraph records come out. Both are plain values with no
//! knowledge of where text came from or where records end up.

mod page;
mod record;

pub use page::{Page, FORM_FEED};
pub use record::ParagraphRecord;
