//! Per-mode aggregations over a loaded [`Dataset`](crate::dataset::Dataset)

pub mod head_to_head;
pub mod player;
pub mod venue;

pub use head_to_head::{head_to_head, HeadToHead, HeadToHeadReport, RecentMatch, RECENT_MATCHES};
pub use player::{player_performance, PlayerReport};
pub use venue::{venue_insights, VenueReport};

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
