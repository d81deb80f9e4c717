//! Block model and payload helpers.
//!
//! Blocks arrive with a type tag and a type-specific payload whose
//! shape varies per kind; only the identifying fields are typed and
//! the payload stays raw JSON. The extractors below read the three
//! shapes the migration cares about, the builders produce the blocks
//! the record section is made of.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use uuid::Uuid;

/// A single content block of a page
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// One page of a `GET /blocks/{id}/children` listing
#[derive(Debug, Deserialize)]
pub struct BlockList {
    pub results: Vec<Block>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// A page object as returned by `GET /pages/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: Uuid,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Page {
    /// Plain text of the page's title property, whichever property
    /// carries the "title" type.
    pub fn title(&self) -> Option<String> {
        let property = self
            .properties
            .values()
            .find(|p| p.get("type").and_then(Value::as_str) == Some("title"))?;
        let items = property.get("title")?.as_array()?;

        let title: String = items
            .iter()
            .filter_map(|item| item.get("plain_text").and_then(Value::as_str))
            .collect();

        if title.is_empty() {
            None
        } else {
            Some(title)
        }
    }
}

/// Resolve the URL of an image block. Externally hosted images carry
/// it under `external`, uploaded ones under `file`; anything else has
/// no usable URL.
pub fn image_url(block: &Block) -> Option<String> {
    if block.block_type != "image" {
        return None;
    }
    let image = block.payload.get("image")?;

    match image.get("type").and_then(Value::as_str) {
        Some("external") => image
            .get("external")
            .and_then(|e| e.get("url"))
            .and_then(Value::as_str)
            .map(String::from),
        Some("file") => image
            .get("file")
            .and_then(|f| f.get("url"))
            .and_then(Value::as_str)
            .map(String::from),
        _ => None,
    }
}

/// Extract the text of a paragraph block: plain text of its
/// "text"-type rich-text items, one segment per line, trimmed.
/// Non-paragraph blocks yield an empty string.
pub fn paragraph_text(block: &Block) -> String {
    if block.block_type != "paragraph" {
        return String::new();
    }

    let segments: Vec<&str> = block
        .payload
        .get("paragraph")
        .and_then(|p| p.get("rich_text"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|item| item.get("type").and_then(Value::as_str) == Some("text"))
                .filter_map(|item| item.get("plain_text").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();

    segments.join("\n").trim().to_string()
}

/// Concatenated plain text of any rich-text-bearing block (headings,
/// paragraphs, quotes, ...). Empty for blocks without rich text.
pub fn rich_text_plain(block: &Block) -> String {
    block
        .payload
        .get(block.block_type.as_str())
        .and_then(|payload| payload.get("rich_text"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("plain_text").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

fn rich_text(content: &str) -> Value {
    json!([{ "type": "text", "text": { "content": content } }])
}

pub fn heading_2(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "heading_2",
        "heading_2": { "rich_text": rich_text(text) }
    })
}

pub fn heading_3(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "heading_3",
        "heading_3": { "rich_text": rich_text(text) }
    })
}

pub fn paragraph(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "paragraph",
        "paragraph": { "rich_text": rich_text(text) }
    })
}

pub fn empty_paragraph() -> Value {
    json!({
        "object": "block",
        "type": "paragraph",
        "paragraph": { "rich_text": [] }
    })
}

pub fn external_image(url: &str) -> Value {
    json!({
        "object": "block",
        "type": "image",
        "image": { "type": "external", "external": { "url": url } }
    })
}

pub fn divider() -> Value {
    json!({
        "object": "block",
        "type": "divider",
        "divider": {}
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(value: Value) -> Block {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_deserialize_api_block() {
        let block = block(json!({
            "object": "block",
            "id": "5b1f7c86-3ac6-4d73-bd6a-5d9ab2a1c28e",
            "type": "paragraph",
            "created_time": "2025-03-01T09:30:00.000Z",
            "last_edited_time": "2025-03-02T10:00:00.000Z",
            "has_children": false,
            "paragraph": { "rich_text": [] }
        }));

        assert_eq!(block.block_type, "paragraph");
        assert!(block.created_time.is_some());
        assert!(block.payload.contains_key("paragraph"));
    }

    #[test]
    fn test_image_url_external() {
        let block = block(json!({
            "id": "5b1f7c86-3ac6-4d73-bd6a-5d9ab2a1c28e",
            "type": "image",
            "image": { "type": "external", "external": { "url": "https://img.example/a.png" } }
        }));

        assert_eq!(image_url(&block).as_deref(), Some("https://img.example/a.png"));
    }

    #[test]
    fn test_image_url_file() {
        let block = block(json!({
            "id": "5b1f7c86-3ac6-4d73-bd6a-5d9ab2a1c28e",
            "type": "image",
            "image": { "type": "file", "file": { "url": "https://s3.example/b.png", "expiry_time": "2025-03-01T10:30:00.000Z" } }
        }));

        assert_eq!(image_url(&block).as_deref(), Some("https://s3.example/b.png"));
    }

    #[test]
    fn test_image_url_unresolvable() {
        let unknown_source = block(json!({
            "id": "5b1f7c86-3ac6-4d73-bd6a-5d9ab2a1c28e",
            "type": "image",
            "image": { "type": "emoji" }
        }));
        assert_eq!(image_url(&unknown_source), None);

        let not_an_image = block(json!({
            "id": "5b1f7c86-3ac6-4d73-bd6a-5d9ab2a1c28e",
            "type": "divider",
            "divider": {}
        }));
        assert_eq!(image_url(&not_an_image), None);
    }

    #[test]
    fn test_paragraph_text_joins_segments() {
        let block = block(json!({
            "id": "5b1f7c86-3ac6-4d73-bd6a-5d9ab2a1c28e",
            "type": "paragraph",
            "paragraph": { "rich_text": [
                { "type": "text", "plain_text": "first segment" },
                { "type": "mention", "plain_text": "@someone" },
                { "type": "text", "plain_text": "second segment" }
            ]}
        }));

        // Mentions are not "text" items and are left out
        assert_eq!(paragraph_text(&block), "first segment\nsecond segment");
    }

    #[test]
    fn test_paragraph_text_empty_for_other_types() {
        let block = block(json!({
            "id": "5b1f7c86-3ac6-4d73-bd6a-5d9ab2a1c28e",
            "type": "heading_2",
            "heading_2": { "rich_text": [{ "type": "text", "plain_text": "a heading" }] }
        }));

        assert_eq!(paragraph_text(&block), "");
    }

    #[test]
    fn test_rich_text_plain_reads_any_block_type() {
        let block = block(json!({
            "id": "5b1f7c86-3ac6-4d73-bd6a-5d9ab2a1c28e",
            "type": "heading_2",
            "heading_2": { "rich_text": [
                { "type": "text", "plain_text": "기록" },
                { "type": "text", "plain_text": "정보" }
            ]}
        }));

        assert_eq!(rich_text_plain(&block), "기록정보");
    }

    #[test]
    fn test_page_title_lookup() {
        let page: Page = serde_json::from_value(json!({
            "id": "18cfcf15-b6ad-8167-a571-f768b898058d",
            "archived": false,
            "properties": {
                "Status": { "type": "select", "select": { "name": "reading" } },
                "Name": { "type": "title", "title": [
                    { "plain_text": "어린왕자" }
                ]}
            }
        }))
        .unwrap();

        assert_eq!(page.title().as_deref(), Some("어린왕자"));
    }

    #[test]
    fn test_builders_produce_tagged_blocks() {
        let heading = heading_2("기록정보");
        assert_eq!(heading["type"], "heading_2");
        assert_eq!(heading["heading_2"]["rich_text"][0]["text"]["content"], "기록정보");

        let para = paragraph("line");
        assert_eq!(para["paragraph"]["rich_text"][0]["text"]["content"], "line");

        assert_eq!(empty_paragraph()["paragraph"]["rich_text"].as_array().unwrap().len(), 0);
        assert_eq!(divider()["type"], "divider");
        assert_eq!(
            external_image("https://img.example/a.png")["image"]["external"]["url"],
            "https://img.example/a.png"
        );
    }
}
