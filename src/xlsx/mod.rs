pub mod writer;

pub use writer::write_head_to_head_report;
pub use writer::write_player_report;
pub use writer::write_venue_report;
