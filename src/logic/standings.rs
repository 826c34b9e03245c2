//! Standings: per-participant aggregates and ranking, recomputed from the schedule on every call.

use crate::models::{Metric, Participant, Schedule, StandingsRow};
use std::collections::BTreeMap;

/// Build the standings table for every participant in `schedule`, ranked by `metric`.
///
/// Sorting is stable and descending; ties keep alphabetical order.
pub fn compute_standings(schedule: &Schedule, metric: Metric) -> Vec<StandingsRow> {
    let mut table: BTreeMap<&Participant, StandingsRow> = BTreeMap::new();
    for m in schedule.matches() {
        for p in [&m.home, &m.away] {
            table
                .entry(p)
                .or_insert_with(|| StandingsRow::new(p.clone()));
        }
        if !m.is_played() {
            continue;
        }
        for p in [&m.home, &m.away] {
            if let Some(row) = table.get_mut(p) {
                row.played += 1;
                if m.is_draw() {
                    row.drawn += 1;
                } else if m.winner() == Some(p) {
                    row.won += 1;
                } else {
                    row.lost += 1;
                }
            }
        }
    }

    let mut rows: Vec<StandingsRow> = table
        .into_values()
        .map(|mut row| {
            row.points = row.won * 3 + row.drawn;
            row.percentage = percentage(row.won, row.drawn, row.played);
            row
        })
        .collect();

    match metric {
        Metric::Points => rows.sort_by(|a, b| b.points.cmp(&a.points)),
        Metric::Percentage => rows.sort_by(|a, b| b.percentage.total_cmp(&a.percentage)),
    }
    for (idx, row) in rows.iter_mut().enumerate() {
        row.rank = idx + 1;
    }
    rows
}

/// Share of available points taken, counting a draw as half a win. 0 when nothing is played.
fn percentage(won: u32, drawn: u32, played: u32) -> f64 {
    if played == 0 {
        return 0.0;
    }
    let pct = f64::from(won * 2 + drawn) / f64::from(played * 2);
    (pct * 1000.0).round() / 1000.0
}
