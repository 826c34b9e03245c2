//! Setup phase: build the schedule (transition from Setup to Scheduled).

use crate::logic::{assign_dates, generate_schedule, validate_inputs};
use crate::models::{Competition, CompetitionError, CompetitionState};

/// Validate participant and date counts, generate all pairings and place them on dates.
///
/// On error the competition is left untouched.
pub fn build_schedule(competition: &mut Competition) -> Result<(), CompetitionError> {
    if competition.state != CompetitionState::Setup {
        return Err(CompetitionError::InvalidState);
    }
    validate_inputs(&competition.participants, &competition.dates)?;

    let mut schedule = generate_schedule(&competition.participants)?;
    assign_dates(&mut schedule, &competition.dates);

    log::info!(
        "Competition {}: scheduled {} matches over {} rounds",
        competition.id,
        schedule.len(),
        schedule.rounds()
    );
    competition.schedule = schedule;
    competition.state = CompetitionState::Scheduled;
    Ok(())
}
