//! Competition session: participants, candidate dates, and the generated schedule.

use crate::models::game::{MatchId, Schedule};
use crate::models::participant::{CalendarDate, Participant};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during competition operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CompetitionError {
    /// Fewer than 2 participants.
    #[error("At least two participants are needed to generate a schedule (found {found})")]
    InsufficientParticipants { found: usize },
    /// Fewer candidate dates than rounds.
    #[error("At least {required} dates are needed (found {found})")]
    InsufficientDates { required: usize, found: usize },
    /// Score was negative or not a number. The match is left unchanged.
    #[error("Invalid score: {0}")]
    InvalidScore(String),
    /// Name is empty after normalization.
    #[error("Invalid participant name")]
    InvalidParticipantName,
    #[error("Participant {0} already added")]
    DuplicateParticipant(Participant),
    #[error("Date {0} already added")]
    DuplicateDate(CalendarDate),
    #[error("Participant {0} not found")]
    ParticipantNotFound(String),
    #[error("Date {0} not found")]
    DateNotFound(CalendarDate),
    #[error("Match not found")]
    MatchNotFound(MatchId),
    /// Competition is not in a state that allows this action.
    #[error("Invalid state for this action")]
    InvalidState,
    #[error("Import failed: {0}")]
    Import(String),
}

/// Unique identifier for a competition.
pub type CompetitionId = Uuid;

/// Current phase of the competition.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionState {
    /// Adding and removing participants and dates; no schedule yet.
    #[default]
    Setup,
    /// Schedule generated; inputs are frozen and results can be entered.
    Scheduled,
}

/// A single-leg round-robin competition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    /// Alphabetical.
    pub participants: Vec<Participant>,
    /// Chronological.
    pub dates: Vec<CalendarDate>,
    pub schedule: Schedule,
    pub state: CompetitionState,
}

impl Default for Competition {
    fn default() -> Self {
        Self::new()
    }
}

impl Competition {
    /// Create a new competition in Setup state with no participants or dates.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            participants: Vec::new(),
            dates: Vec::new(),
            schedule: Schedule::default(),
            state: CompetitionState::Setup,
        }
    }

    /// Add a participant from raw input (Setup only). Returns the normalized name.
    pub fn add_participant(&mut self, raw: &str) -> Result<Participant, CompetitionError> {
        if self.state != CompetitionState::Setup {
            return Err(CompetitionError::InvalidState);
        }
        let participant =
            Participant::parse(raw).ok_or(CompetitionError::InvalidParticipantName)?;
        match self.participants.binary_search(&participant) {
            Ok(_) => Err(CompetitionError::DuplicateParticipant(participant)),
            Err(idx) => {
                self.participants.insert(idx, participant.clone());
                Ok(participant)
            }
        }
    }

    /// Remove a participant by name (Setup only). The name is normalized first.
    pub fn remove_participant(&mut self, raw: &str) -> Result<(), CompetitionError> {
        if self.state != CompetitionState::Setup {
            return Err(CompetitionError::InvalidState);
        }
        let idx = Participant::parse(raw)
            .and_then(|p| self.participants.binary_search(&p).ok())
            .ok_or_else(|| CompetitionError::ParticipantNotFound(raw.to_string()))?;
        self.participants.remove(idx);
        Ok(())
    }

    /// Add a candidate date (Setup only), keeping the list chronological.
    pub fn add_date(&mut self, date: CalendarDate) -> Result<(), CompetitionError> {
        if self.state != CompetitionState::Setup {
            return Err(CompetitionError::InvalidState);
        }
        match self.dates.binary_search(&date) {
            Ok(_) => Err(CompetitionError::DuplicateDate(date)),
            Err(idx) => {
                self.dates.insert(idx, date);
                Ok(())
            }
        }
    }

    /// Remove a candidate date (Setup only).
    pub fn remove_date(&mut self, date: CalendarDate) -> Result<(), CompetitionError> {
        if self.state != CompetitionState::Setup {
            return Err(CompetitionError::InvalidState);
        }
        let idx = self
            .dates
            .binary_search(&date)
            .map_err(|_| CompetitionError::DateNotFound(date))?;
        self.dates.remove(idx);
        Ok(())
    }

    /// Drop the schedule and go back to Setup with the same participants and dates.
    pub fn restart(&mut self) -> Result<(), CompetitionError> {
        if self.state != CompetitionState::Scheduled {
            return Err(CompetitionError::InvalidState);
        }
        self.schedule = Schedule::default();
        self.state = CompetitionState::Setup;
        Ok(())
    }
}
