pub mod espn;

// Re-export commonly used types
pub use espn::{EspnClient, EspnClientConfig, DEFAULT_ODDS_PAGE_URL};
