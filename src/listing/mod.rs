//! The post listing with incremental ("load more") pagination.

mod accumulator;
mod normalize;
mod state;

pub use accumulator::{ListingAccumulator, LoadOutcome};
pub use normalize::{normalize_page, normalize_summary, ListingPage};
pub use state::PaginationState;
