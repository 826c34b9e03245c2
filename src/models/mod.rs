//! Data structures for the competition: participants, matches, schedule, standings.

mod competition;
mod game;
mod participant;
mod standings;

pub use competition::{Competition, CompetitionError, CompetitionId, CompetitionState};
pub use game::{Match, MatchId, Schedule, Score};
pub use participant::{date_label, CalendarDate, Participant};
pub use standings::{Metric, StandingsRow};
