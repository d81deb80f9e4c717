//! Notion API module
//!
//! Blocking client for the handful of endpoints the migration needs,
//! plus the typed block model and the extraction/builder helpers that
//! read and produce block payloads.

mod blocks;
mod client;

pub use blocks::*;
pub use client::{NotionClient, NotionError};
