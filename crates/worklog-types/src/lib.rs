//! Shared types for the Worklog ingestion service.

mod chat;
mod stats;
mod view;
mod work;

pub use chat::*;
pub use stats::*;
pub use view::*;
pub use work::*;
