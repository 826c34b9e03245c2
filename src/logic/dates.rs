//! Date assignment: place matches on the earliest date where neither side already plays.

use crate::models::{CalendarDate, CompetitionError, Participant, Schedule};
use std::collections::{HashMap, HashSet};

/// Fewest dates that always fit a full schedule for `participants` entrants:
/// one per round, so `n - 1` for even `n` and `n` for odd `n`.
pub fn min_dates_required(participants: usize) -> usize {
    if participants % 2 == 0 {
        participants.saturating_sub(1)
    } else {
        participants
    }
}

/// Check participant and date counts before generating. Participant shortfall is reported first.
pub fn validate_inputs(
    participants: &[Participant],
    dates: &[CalendarDate],
) -> Result<(), CompetitionError> {
    if participants.len() < 2 {
        return Err(CompetitionError::InsufficientParticipants {
            found: participants.len(),
        });
    }
    let required = min_dates_required(participants.len());
    if dates.len() < required {
        return Err(CompetitionError::InsufficientDates {
            required,
            found: dates.len(),
        });
    }
    Ok(())
}

/// Assign dates to the schedule's unscheduled matches. Returns how many were placed.
///
/// Matches are taken in schedule order; each gets the first of `dates`
/// (chronological, unique) on which neither participant has another match.
/// Matches already carrying a date keep it and block that date for both sides.
/// A match with no free date stays unscheduled.
///
/// The schedule must be in generator order (ascending rounds, see
/// `generate_schedule`). With at least `min_dates_required` dates that order
/// puts round `r` on the `r`-th date and nothing is left over.
pub fn assign_dates(schedule: &mut Schedule, dates: &[CalendarDate]) -> usize {
    debug_assert!(schedule.matches().windows(2).all(|w| w[0].round <= w[1].round));
    debug_assert!(dates.windows(2).all(|w| w[0] < w[1]));

    let mut busy: HashMap<Participant, HashSet<CalendarDate>> = HashMap::new();
    for m in schedule.matches() {
        if let Some(date) = m.date {
            busy.entry(m.home.clone()).or_default().insert(date);
            busy.entry(m.away.clone()).or_default().insert(date);
        }
    }

    let mut assigned = 0;
    for m in schedule.matches_mut().iter_mut().filter(|m| m.date.is_none()) {
        let free = dates
            .iter()
            .find(|d| !plays_on(&busy, &m.home, d) && !plays_on(&busy, &m.away, d))
            .copied();
        if let Some(date) = free {
            busy.entry(m.home.clone()).or_default().insert(date);
            busy.entry(m.away.clone()).or_default().insert(date);
            m.date = Some(date);
            assigned += 1;
        }
    }

    let left = schedule.unscheduled().count();
    if left > 0 {
        log::warn!(
            "{} of {} matches left unscheduled with {} dates",
            left,
            schedule.len(),
            dates.len()
        );
    } else {
        log::debug!("Assigned {} matches across {} dates", assigned, dates.len());
    }
    assigned
}

fn plays_on(
    busy: &HashMap<Participant, HashSet<CalendarDate>>,
    participant: &Participant,
    date: &CalendarDate,
) -> bool {
    busy.get(participant).is_some_and(|days| days.contains(date))
}
