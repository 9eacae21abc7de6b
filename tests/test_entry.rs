use pretty_assertions::assert_eq;
use table_trend::entry::{EntryError, EntrySession, EntryStep};
use table_trend::{Period, RawRecord};

fn advance(session: &EntrySession, input: &str) -> EntrySession {
    match session.advance(input).unwrap() {
        EntryStep::InProgress(next) => next,
        EntryStep::Complete(_) => panic!("session completed early"),
    }
}

#[test]
fn test_happy_path_builds_record() {
    let session = EntrySession::new();
    let session = advance(&session, "2025-10");
    let session = advance(&session, "1234567.5");
    let session = advance(&session, "1400");

    let step = session.advance("845").unwrap();
    let record = match step {
        EntryStep::Complete(record) => record,
        EntryStep::InProgress(_) => panic!("expected completion"),
    };

    assert_eq!(
        record,
        RawRecord {
            period: Period::new(2025, 10).unwrap(),
            revenue: 1_234_567.5,
            guests: 1_400,
            avg_check: 845.0,
        }
    );
}

#[test]
fn test_month_name_input_accepted() {
    let session = EntrySession::new();
    let next = session.advance("October 2025").unwrap();
    assert_eq!(
        next,
        EntryStep::InProgress(EntrySession::AwaitingRevenue {
            period: Period::new(2025, 10).unwrap()
        })
    );

    // Case-insensitive
    assert!(session.advance("march 2024").is_ok());
}

#[test]
fn test_unrecognized_month_keeps_state_usable() {
    let session = EntrySession::new();
    let err = session.advance("Octember 2025").unwrap_err();
    assert_eq!(
        err,
        EntryError::UnrecognizedMonth("Octember 2025".to_string())
    );

    // The same session still accepts a corrected input
    assert!(session.advance("2025-10").is_ok());
}

#[test]
fn test_numeric_validation() {
    let session = advance(&EntrySession::new(), "2025-10");

    let err = session.advance("lots").unwrap_err();
    assert_eq!(
        err,
        EntryError::InvalidNumber {
            field: "revenue",
            input: "lots".to_string(),
        }
    );

    let err = session.advance("-5").unwrap_err();
    assert_eq!(err, EntryError::NegativeValue { field: "revenue" });
}

#[test]
fn test_guest_count_must_be_integer() {
    let session = advance(&EntrySession::new(), "2025-10");
    let session = advance(&session, "1000000");

    assert!(session.advance("1400.5").is_err());
    assert!(session.advance("-3").is_err());
    assert!(session.advance("1400").is_ok());
}
