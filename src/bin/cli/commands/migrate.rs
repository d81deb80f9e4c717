use std::thread;
use std::time::Duration;

use anyhow::Result;

use bookrec::catalog::{Book, BOOKS};
use bookrec::notion::{NotionClient, NotionError};
use bookrec::record::{pair_blocks, record_section_blocks};

use crate::app::App;

use super::{PAGE_PAUSE_MS, RULE_WIDTH};

pub fn run(app: &App) -> Result<()> {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Reading-list migration");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{} book pages to process\n", BOOKS.len());

    let mut succeeded = 0;
    let mut failed = 0;

    for (i, book) in BOOKS.iter().enumerate() {
        match migrate_book(&app.client, book) {
            Ok(true) => succeeded += 1,
            Ok(false) => failed += 1,
            Err(e) => {
                println!("   ❌ error: {}", e);
                log::debug!("migrate: page {} failed: {:?}", book.page_id, e);
                failed += 1;
            }
        }

        if i + 1 < BOOKS.len() {
            thread::sleep(Duration::from_millis(PAGE_PAUSE_MS));
        }
    }

    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("Migration finished");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("✅ succeeded: {}", succeeded);
    println!("❌ failed: {}", failed);
    println!("📊 total: {}", BOOKS.len());

    Ok(())
}

/// Migrate a single book page. `Ok(false)` means the page was skipped
/// because no pairs could be extracted; skipped pages count as
/// failures in the summary.
fn migrate_book(client: &NotionClient, book: &Book) -> Result<bool, NotionError> {
    println!("\n📖 Processing: {}", book.title);

    let blocks = client.list_children(book.page_id)?;
    println!("   {} blocks found", blocks.len());

    let pairs = pair_blocks(&blocks);
    println!("   {} image-text pairs extracted", pairs.len());

    if pairs.is_empty() {
        println!("   ⚠️  no images found, skipping");
        return Ok(false);
    }

    let record_blocks = record_section_blocks(&pairs);
    println!("   {} record section blocks built", record_blocks.len());

    client.append_children(book.page_id, &record_blocks)?;
    println!("   ✅ record section appended");

    Ok(true)
}
