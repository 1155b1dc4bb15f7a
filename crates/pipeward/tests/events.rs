use pipeward::{EventKind, Notifications, ReconcileError};

#[test]
fn event_kind_parse_is_case_insensitive() {
    for raw in ["warning", "Warning", "WARNING", "wArNiNg"] {
        assert_eq!(raw.parse::<EventKind>().unwrap(), EventKind::Warning);
    }
    assert_eq!(
        "progressing".parse::<EventKind>().unwrap(),
        EventKind::Progressing
    );
    assert_eq!(
        "COMPLETED".parse::<EventKind>().unwrap(),
        EventKind::Completed
    );
    assert_eq!("Error".parse::<EventKind>().unwrap(), EventKind::Error);
}

#[test]
fn unknown_event_kind_is_rejected() {
    let err = "finished".parse::<EventKind>().unwrap_err();
    assert!(matches!(err, ReconcileError::InvalidEventKind(k) if k == "finished"));
}

#[test]
fn wire_names_are_first_letter_capitalized() {
    assert_eq!(EventKind::Progressing.as_str(), "Progressing");
    assert_eq!(EventKind::Completed.as_str(), "Completed");
    assert_eq!(EventKind::Warning.as_str(), "Warning");
    assert_eq!(EventKind::Error.as_str(), "Error");
}

#[test]
fn from_pairs_defaults_unmentioned_kinds_to_empty() {
    let n = Notifications::from_pairs([("completed", "arn:1")]).unwrap();
    assert_eq!(n.completed, "arn:1");
    assert_eq!(n.progressing, "");
    assert_eq!(n.warning, "");
    assert_eq!(n.error, "");
}

#[test]
fn from_pairs_rejects_unknown_keys() {
    let err = Notifications::from_pairs([("done", "arn:1")]).unwrap_err();
    assert!(matches!(err, ReconcileError::InvalidEventKind(_)));
}

#[test]
fn later_pairs_overwrite_earlier_ones() {
    let n = Notifications::from_pairs([("error", "arn:old"), ("ERROR", "arn:new")]).unwrap();
    assert_eq!(n.error, "arn:new");
}

#[test]
fn normalization_is_idempotent() {
    let once = Notifications::from_pairs([
        ("progressing", ""),
        ("completed", "arn:1"),
        ("WARNING", "arn:1"),
        ("Error", "arn:1"),
    ])
    .unwrap();

    // Re-feed the normalized value through the boundary parser.
    let twice =
        Notifications::from_pairs(EventKind::ALL.map(|k| (k.as_str(), once.topic(k)))).unwrap();

    assert_eq!(once, twice);
}
