//! Match-log-to-standings aggregation for football-league progress charts.
//!
//! The pipeline is: raw feed text → [`feed::parse_feed`] → canonical,
//! date-ordered match list → [`standings::compute_standings`] → a
//! [`standings::StandingsSnapshot`] that renderers consume read-only.
//! Downloading feeds lives in [`fetch`]; everything else is pure.

pub mod aliases;
pub mod error;
pub mod feed;
pub mod fetch;
pub mod form;
pub mod league;
pub mod standings;
pub mod style;

pub use error::Error;
pub use feed::{Layout, MatchRecord, TeamId, parse_feed};
pub use standings::{PenaltyMap, StandingsSnapshot, compute_standings};
