//! Bulk entry of participants and dates from CSV text.
//!
//! One record per line, no header: `participant,<name>` or `date,<YYYY-MM-DD>`.

use crate::models::{CalendarDate, Competition, CompetitionError};
use serde::Serialize;

/// What an import added, and the records that were turned away with the reason.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ImportSummary {
    pub participants_added: usize,
    pub dates_added: usize,
    pub rejected: Vec<String>,
}

/// Feed every record through the normal add path. Bad records are skipped and reported.
pub fn import_csv(
    competition: &mut Competition,
    text: &str,
) -> Result<ImportSummary, CompetitionError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut summary = ImportSummary::default();
    for record in reader.records() {
        let record = record.map_err(|e| CompetitionError::Import(e.to_string()))?;
        let kind = record.get(0).unwrap_or_default();
        let value = record.get(1).unwrap_or_default();
        let added = match kind.to_ascii_lowercase().as_str() {
            "" if value.is_empty() => continue,
            "participant" => competition.add_participant(value).map(|_| ()),
            "date" => parse_date(value).and_then(|d| competition.add_date(d)),
            _ => Err(CompetitionError::Import(format!("unknown record kind {kind:?}"))),
        };
        match added {
            Ok(()) if kind.eq_ignore_ascii_case("participant") => summary.participants_added += 1,
            Ok(()) => summary.dates_added += 1,
            Err(CompetitionError::InvalidState) => return Err(CompetitionError::InvalidState),
            Err(e) => summary.rejected.push(format!("{kind},{value}: {e}")),
        }
    }

    log::info!(
        "Competition {}: imported {} participants, {} dates ({} rejected)",
        competition.id,
        summary.participants_added,
        summary.dates_added,
        summary.rejected.len()
    );
    Ok(summary)
}

fn parse_date(raw: &str) -> Result<CalendarDate, CompetitionError> {
    CalendarDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CompetitionError::Import(format!("invalid date {raw:?}")))
}
