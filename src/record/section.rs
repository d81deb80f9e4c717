use serde_json::Value;

use crate::notion::{
    divider, empty_paragraph, external_image, heading_2, heading_3, paragraph, rich_text_plain,
    Block,
};
use crate::record::ImageTextPair;

/// Section heading the migration appends and the rollback looks for.
/// The headings are page content in the workspace's own language and
/// must match the original pages byte for byte.
pub const RECORD_HEADING: &str = "기록정보";
/// Sub-heading above each transcription image
const TRANSCRIPTION_HEADING: &str = "필사정보";
/// Sub-heading above the reader's own thoughts
const THOUGHTS_HEADING: &str = "내생각정보";

/// Render the pairs into the record section block list: one section
/// heading, then per pair the two sub-headings around the image and
/// its text (one paragraph per non-blank line, or a single empty
/// paragraph), with a divider between pairs but not after the last.
pub fn record_section_blocks(pairs: &[ImageTextPair]) -> Vec<Value> {
    let mut blocks = Vec::new();

    blocks.push(heading_2(RECORD_HEADING));

    for (i, pair) in pairs.iter().enumerate() {
        blocks.push(heading_3(TRANSCRIPTION_HEADING));
        blocks.push(external_image(&pair.image_url));
        blocks.push(heading_3(THOUGHTS_HEADING));

        if pair.text.is_empty() {
            blocks.push(empty_paragraph());
        } else {
            for line in pair.text.split('\n') {
                let line = line.trim();
                if !line.is_empty() {
                    blocks.push(paragraph(line));
                }
            }
        }

        if i + 1 < pairs.len() {
            blocks.push(divider());
        }
    }

    blocks
}

/// Index of the record section heading within a page's blocks: the
/// first `heading_2` whose plain text is exactly the record heading.
/// Everything from that index on belongs to the appended section.
pub fn locate_record_section(blocks: &[Block]) -> Option<usize> {
    blocks
        .iter()
        .position(|block| block.block_type == "heading_2" && rich_text_plain(block) == RECORD_HEADING)
}
