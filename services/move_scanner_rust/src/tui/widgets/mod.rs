//! Dashboard widget components

pub mod footer;
pub mod header;
pub mod leagues;
pub mod totals;

pub use footer::render_footer;
pub use header::render_header;
pub use leagues::render_leagues;
pub use totals::render_totals;
