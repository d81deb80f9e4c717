pub mod inspect;
pub mod migrate;
pub mod rollback;

/// Banner/summary separator width shared by the batch commands
pub const RULE_WIDTH: usize = 60;

/// Pause between pages to stay under the API rate limit
pub const PAGE_PAUSE_MS: u64 = 500;
