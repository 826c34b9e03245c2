//! Result entry: scores for a single match.

use crate::models::{Competition, CompetitionError, CompetitionState, Match, MatchId, Score};

/// Set the final score of `game`. Re-entry overwrites the previous result.
///
/// Both scores must be non-negative; otherwise the match is left unchanged.
pub fn record_result(
    game: &mut Match,
    home_score: i64,
    away_score: i64,
) -> Result<&Match, CompetitionError> {
    let home = to_score(home_score)?;
    let away = to_score(away_score)?;
    game.result = Some(Score { home, away });
    log::debug!("{} {}-{} {}", game.home, home, away, game.away);
    Ok(game)
}

/// Parse a score typed by a user. Blank, non-numeric and negative input is rejected.
pub fn parse_score(raw: &str) -> Result<i64, CompetitionError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| CompetitionError::InvalidScore(raw.to_string()))?;
    to_score(value)?;
    Ok(value)
}

/// Record a result for one match of a scheduled competition.
pub fn set_match_result(
    competition: &mut Competition,
    match_id: MatchId,
    home_score: i64,
    away_score: i64,
) -> Result<(), CompetitionError> {
    if competition.state != CompetitionState::Scheduled {
        return Err(CompetitionError::InvalidState);
    }
    let game = competition
        .schedule
        .get_mut(match_id)
        .ok_or(CompetitionError::MatchNotFound(match_id))?;
    record_result(game, home_score, away_score)?;
    Ok(())
}

fn to_score(value: i64) -> Result<u32, CompetitionError> {
    u32::try_from(value).map_err(|_| CompetitionError::InvalidScore(value.to_string()))
}
