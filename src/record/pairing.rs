use crate::notion::{image_url, paragraph_text, Block};

/// An image and the text that followed it on the page
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTextPair {
    pub image_url: String,
    pub text: String,
}

/// Fold a flat block list into ordered image/text pairs.
///
/// The scan carries at most one pending image. A paragraph with
/// non-empty text closes the pending image into a pair; a new image
/// closes the pending one with empty text. Text with no preceding
/// image is not recorded, every other block type is ignored.
pub fn pair_blocks(blocks: &[Block]) -> Vec<ImageTextPair> {
    let mut pairs = Vec::new();
    let mut pending_image: Option<String> = None;

    for block in blocks {
        match block.block_type.as_str() {
            "image" => {
                if let Some(url) = image_url(block) {
                    if let Some(previous) = pending_image.replace(url) {
                        pairs.push(ImageTextPair {
                            image_url: previous,
                            text: String::new(),
                        });
                    }
                }
            }
            "paragraph" => {
                let text = paragraph_text(block);
                if !text.is_empty() {
                    if let Some(url) = pending_image.take() {
                        pairs.push(ImageTextPair {
                            image_url: url,
                            text,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    if let Some(url) = pending_image {
        pairs.push(ImageTextPair {
            image_url: url,
            text: String::new(),
        });
    }

    pairs
}
