//! Match, Score, and the Schedule that owns every match of a competition.

use crate::models::participant::{CalendarDate, Participant};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Final score of a played match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// A single fixture between two participants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home: Participant,
    pub away: Participant,
    /// Generator round (0-based). Matches in one round never share a participant.
    pub round: usize,
    /// None until the date assignor finds a free date.
    pub date: Option<CalendarDate>,
    /// None if not yet played.
    pub result: Option<Score>,
}

impl Match {
    pub fn new(home: Participant, away: Participant, round: usize) -> Self {
        debug_assert!(home != away);
        Self {
            id: Uuid::new_v4(),
            home,
            away,
            round,
            date: None,
            result: None,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.date.is_some()
    }

    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    pub fn has_winner(&self) -> bool {
        matches!(self.result, Some(s) if s.home != s.away)
    }

    pub fn is_draw(&self) -> bool {
        matches!(self.result, Some(s) if s.home == s.away)
    }

    /// The winning side, if the match was played and not drawn.
    pub fn winner(&self) -> Option<&Participant> {
        match self.result {
            Some(s) if s.home > s.away => Some(&self.home),
            Some(s) if s.away > s.home => Some(&self.away),
            _ => None,
        }
    }

    pub fn involves(&self, participant: &Participant) -> bool {
        self.home == *participant || self.away == *participant
    }
}

/// Every match of a competition, in generator emission order.
///
/// The order is grouped by round; date assignment depends on it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    matches: Vec<Match>,
}

impl Schedule {
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn matches_mut(&mut self) -> &mut [Match] {
        &mut self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn get_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Number of generator rounds covered by this schedule.
    pub fn rounds(&self) -> usize {
        self.matches.iter().map(|m| m.round + 1).max().unwrap_or(0)
    }

    /// Matches played on `date`, in schedule order.
    pub fn fixtures_on(&self, date: CalendarDate) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.date == Some(date))
    }

    /// Matches the date assignor could not place.
    pub fn unscheduled(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| !m.is_scheduled())
    }

    pub fn is_fully_scheduled(&self) -> bool {
        self.matches.iter().all(Match::is_scheduled)
    }
}
