use anyhow::Result;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use bookrec::notion::{image_url, rich_text_plain};

use crate::app::App;

const RULE_WIDTH: usize = 80;

pub fn run(app: &App, page_id: Uuid) -> Result<()> {
    let page_id = page_id.to_string();

    println!("Analyzing page block structure...\n");

    let page = app.client.get_page(&page_id)?;
    let title = page.title().unwrap_or_else(|| "(untitled)".to_string());
    let archived = if page.archived { " [archived]" } else { "" };
    println!("Page: {}{}", title, archived);

    let blocks = app.client.list_children(&page_id)?;
    println!("{} blocks found\n", blocks.len());
    println!("{}", "=".repeat(RULE_WIDTH));

    for (i, block) in blocks.iter().enumerate() {
        println!("\n[{}] type: {}", i + 1, block.block_type);
        println!("    id: {}", block.id);
        println!("    created: {}", format_time(block.created_time));
        println!("    edited: {}", format_time(block.last_edited_time));

        if block.block_type == "image" {
            match image_url(block) {
                Some(url) => println!("    image URL: {}", truncate(&url, 80)),
                None => println!("    image URL: (unresolvable)"),
            }
        } else {
            let text = rich_text_plain(block);
            if text.is_empty() {
                println!("    text: (none)");
            } else {
                println!("    text: {}", truncate(&text, 100));
            }
        }
    }

    println!("\n{}", "=".repeat(RULE_WIDTH));
    Ok(())
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.to_rfc3339()).unwrap_or_else(|| "-".to_string())
}

/// Truncate on character boundaries; page text is mostly Korean and
/// byte slicing would split a code point.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}
