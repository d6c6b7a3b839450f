pub mod delivery;
pub mod fixture;
pub mod team;

pub use delivery::{DeliveryRecord, JoinedDelivery};
pub use fixture::{MatchRecord, TossDecision};
pub use team::{canonical_team_name, normalize_team, LEGACY_TEAM_NAMES};
