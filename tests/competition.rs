//! Integration tests for the competition session: input entry, setup, results, import.

use chrono::NaiveDate;
use round_robin_scheduler::{
    build_schedule, compute_standings, import_csv, set_match_result, Competition,
    CompetitionError, CompetitionState, Metric, Participant,
};
use uuid::Uuid;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
}

fn competition_with(names: &[&str], days: &[u32]) -> Competition {
    let mut c = Competition::new();
    for name in names {
        c.add_participant(name).unwrap();
    }
    for d in days {
        c.add_date(day(*d)).unwrap();
    }
    c
}

#[test]
fn participants_are_normalized_and_kept_sorted() {
    let mut c = Competition::new();
    assert_eq!(c.add_participant("  zebras ").unwrap().name(), "ZEBRAS");
    c.add_participant("Ajax!").unwrap();
    c.add_participant("mid town").unwrap();
    let names: Vec<&str> = c.participants.iter().map(Participant::name).collect();
    assert_eq!(names, ["AJAX", "MID TOWN", "ZEBRAS"]);
}

#[test]
fn duplicate_and_blank_participants_are_rejected() {
    let mut c = Competition::new();
    c.add_participant("Rovers").unwrap();
    assert!(matches!(
        c.add_participant(" ROVERS "),
        Err(CompetitionError::DuplicateParticipant(_))
    ));
    assert_eq!(c.add_participant("  #  "), Err(CompetitionError::InvalidParticipantName));
    assert_eq!(c.participants.len(), 1);
}

#[test]
fn dates_are_kept_chronological_and_unique() {
    let mut c = Competition::new();
    c.add_date(day(20)).unwrap();
    c.add_date(day(6)).unwrap();
    c.add_date(day(13)).unwrap();
    assert_eq!(c.add_date(day(13)), Err(CompetitionError::DuplicateDate(day(13))));
    assert_eq!(c.dates, vec![day(6), day(13), day(20)]);
}

#[test]
fn remove_participant_and_date() {
    let mut c = competition_with(&["A", "B", "C"], &[1, 2]);
    c.remove_participant("b").unwrap();
    c.remove_date(day(1)).unwrap();
    let names: Vec<&str> = c.participants.iter().map(Participant::name).collect();
    assert_eq!(names, ["A", "C"]);
    assert_eq!(c.dates, vec![day(2)]);

    assert!(matches!(
        c.remove_participant("nobody"),
        Err(CompetitionError::ParticipantNotFound(_))
    ));
    assert_eq!(c.remove_date(day(9)), Err(CompetitionError::DateNotFound(day(9))));
}

#[test]
fn build_schedule_needs_enough_participants_and_dates() {
    let mut c = competition_with(&["A"], &[1, 2, 3]);
    assert_eq!(
        build_schedule(&mut c),
        Err(CompetitionError::InsufficientParticipants { found: 1 })
    );

    let mut c = competition_with(&["A", "B", "C"], &[1, 2]);
    assert_eq!(
        build_schedule(&mut c),
        Err(CompetitionError::InsufficientDates { required: 3, found: 2 })
    );
    assert_eq!(c.state, CompetitionState::Setup);
    assert!(c.schedule.is_empty());
}

#[test]
fn build_schedule_generates_and_dates_every_match() {
    let mut c = competition_with(&["A", "B", "C", "D"], &[1, 8, 15, 22]);
    build_schedule(&mut c).unwrap();

    assert_eq!(c.state, CompetitionState::Scheduled);
    assert_eq!(c.schedule.len(), 6);
    assert!(c.schedule.is_fully_scheduled());
    assert_eq!(c.schedule.fixtures_on(day(1)).count(), 2);
    assert_eq!(c.schedule.fixtures_on(day(22)).count(), 0);
}

#[test]
fn inputs_are_frozen_once_scheduled() {
    let mut c = competition_with(&["A", "B"], &[1]);
    build_schedule(&mut c).unwrap();
    assert_eq!(c.add_participant("C"), Err(CompetitionError::InvalidState));
    assert_eq!(c.remove_participant("A"), Err(CompetitionError::InvalidState));
    assert_eq!(c.add_date(day(2)), Err(CompetitionError::InvalidState));
    assert_eq!(c.remove_date(day(1)), Err(CompetitionError::InvalidState));
    assert_eq!(build_schedule(&mut c), Err(CompetitionError::InvalidState));
}

#[test]
fn set_match_result_updates_standings() {
    let mut c = competition_with(&["A", "B", "C", "D"], &[1, 2, 3]);
    assert_eq!(
        set_match_result(&mut c, Uuid::new_v4(), 1, 0),
        Err(CompetitionError::InvalidState)
    );
    build_schedule(&mut c).unwrap();

    let id = c.schedule.matches()[0].id;
    let home = c.schedule.matches()[0].home.clone();
    set_match_result(&mut c, id, 2, 0).unwrap();

    let rows = compute_standings(&c.schedule, Metric::Points);
    assert_eq!(rows[0].participant, home);
    assert_eq!(rows[0].points, 3);

    let missing = Uuid::new_v4();
    assert_eq!(
        set_match_result(&mut c, missing, 1, 0),
        Err(CompetitionError::MatchNotFound(missing))
    );
    assert!(matches!(
        set_match_result(&mut c, id, -3, 0),
        Err(CompetitionError::InvalidScore(_))
    ));
}

#[test]
fn restart_keeps_inputs_and_drops_schedule() {
    let mut c = competition_with(&["A", "B", "C"], &[1, 2, 3]);
    assert_eq!(c.restart(), Err(CompetitionError::InvalidState));
    build_schedule(&mut c).unwrap();

    c.restart().unwrap();
    assert_eq!(c.state, CompetitionState::Setup);
    assert!(c.schedule.is_empty());
    assert_eq!(c.participants.len(), 3);
    assert_eq!(c.dates.len(), 3);
    c.add_participant("D").unwrap();
}

#[test]
fn import_adds_records_and_reports_rejects() {
    let mut c = Competition::new();
    let text = "participant, Lions\n\
                participant,tigers\n\
                date,2024-05-04\n\
                date, 2024-05-11 \n\
                participant,LIONS\n\
                date,not-a-date\n\
                venue,Main St\n\
                participant,???\n";
    let summary = import_csv(&mut c, text).unwrap();

    assert_eq!(summary.participants_added, 2);
    assert_eq!(summary.dates_added, 2);
    assert_eq!(summary.rejected.len(), 4);
    let names: Vec<&str> = c.participants.iter().map(Participant::name).collect();
    assert_eq!(names, ["LIONS", "TIGERS"]);
    assert_eq!(c.dates, vec![day(4), day(11)]);
}

#[test]
fn import_after_scheduling_is_refused() {
    let mut c = competition_with(&["A", "B"], &[1]);
    build_schedule(&mut c).unwrap();
    assert_eq!(
        import_csv(&mut c, "participant,C\n"),
        Err(CompetitionError::InvalidState)
    );
}
