//! Command handlers: start, help, matches, standings, fact.

mod fact;
mod matches;
mod standings;
mod static_text;

pub use fact::{FactHandler, FactSelection, FOOTBALL_FACTS, NO_FACTS};
pub use matches::{format_matches, MatchesHandler, MATCHES_FETCH_FAILED, NO_MATCHES_TODAY};
pub use standings::{
    format_standings, StandingsHandler, NO_STANDINGS, STANDINGS_FETCH_FAILED, STANDINGS_USAGE,
};
pub use static_text::{StaticTextHandler, HELP_TEXT, START_TEXT};
