use std::thread;
use std::time::Duration;

use anyhow::Result;

use bookrec::catalog::{Book, BOOKS};
use bookrec::notion::{NotionClient, NotionError};
use bookrec::record::locate_record_section;

use crate::app::App;

use super::{PAGE_PAUSE_MS, RULE_WIDTH};

/// Pause between block deletions to stay under the API rate limit
const DELETE_PAUSE_MS: u64 = 200;

pub fn run(app: &App) -> Result<()> {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Migration rollback");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{} book pages to roll back\n", BOOKS.len());

    let mut succeeded = 0;
    let mut failed = 0;

    for (i, book) in BOOKS.iter().enumerate() {
        match rollback_book(&app.client, book) {
            Ok(true) => succeeded += 1,
            Ok(false) => failed += 1,
            Err(e) => {
                println!("   ❌ error: {}", e);
                log::debug!("rollback: page {} failed: {:?}", book.page_id, e);
                failed += 1;
            }
        }

        if i + 1 < BOOKS.len() {
            thread::sleep(Duration::from_millis(PAGE_PAUSE_MS));
        }
    }

    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("Rollback finished");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("✅ succeeded: {}", succeeded);
    println!("❌ failed: {}", failed);
    println!("📊 total: {}", BOOKS.len());

    Ok(())
}

/// Remove the record section from one book page. `Ok(false)` means no
/// record section was found on the page.
fn rollback_book(client: &NotionClient, book: &Book) -> Result<bool, NotionError> {
    println!("\n📖 Rolling back: {}", book.title);

    let blocks = client.list_children(book.page_id)?;
    println!("   {} blocks found", blocks.len());

    let Some(index) = locate_record_section(&blocks) else {
        println!("   ⚠️  no record section found");
        return Ok(false);
    };
    println!("   record section found at index {}", index);

    let section = &blocks[index..];
    println!("   {} blocks to delete", section.len());

    // Delete back to front so the remaining blocks keep their order
    // while the section shrinks.
    for block in section.iter().rev() {
        client.delete_block(block.id)?;
        thread::sleep(Duration::from_millis(DELETE_PAUSE_MS));
    }

    println!("   ✅ record section removed");
    Ok(true)
}
