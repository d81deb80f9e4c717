//! Record section module
//!
//! The pairing scan that folds a page's blocks into image/text pairs,
//! and the rendering of those pairs into the record section that gets
//! appended to the page.

mod pairing;
mod section;

pub use pairing::{pair_blocks, ImageTextPair};
pub use section::{locate_record_section, record_section_blocks, RECORD_HEADING};
