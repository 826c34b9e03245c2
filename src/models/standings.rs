//! Standings table rows and the metric they are ranked by.

use crate::models::participant::Participant;
use serde::{Deserialize, Serialize};

/// Which aggregate the standings table is sorted by (descending).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// 3 per win, 1 per draw.
    #[default]
    Points,
    /// (2 * won + drawn) / (2 * played), rounded to 3 decimals.
    Percentage,
}

/// One participant's line in the standings. Always derived from the schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub participant: Participant,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub points: u32,
    pub percentage: f64,
    /// 1-based position after sorting.
    pub rank: usize,
}

impl StandingsRow {
    /// Empty row: nothing played, unranked.
    pub fn new(participant: Participant) -> Self {
        Self {
            participant,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            points: 0,
            percentage: 0.0,
            rank: 0,
        }
    }
}
