//! Notion reading-list record migration.
//!
//! Pairs each transcription image on a book page with the paragraph
//! text that follows it and appends the pairs as a structured record
//! section. The `rollback` and `inspect` flows share the same client
//! and block model.

pub mod catalog;
pub mod config;
pub mod notion;
pub mod record;
