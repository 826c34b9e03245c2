//! Round-robin competition scheduler: library with models and scheduling logic.

pub mod logic;
pub mod models;

pub use logic::{
    assign_dates, build_schedule, compute_standings, generate_schedule, import_csv,
    min_dates_required, parse_score, record_result, set_match_result, validate_inputs,
    ImportSummary,
};
pub use models::{
    date_label, CalendarDate, Competition, CompetitionError, CompetitionId, CompetitionState,
    Match, MatchId, Metric, Participant, Schedule, Score, StandingsRow,
};
