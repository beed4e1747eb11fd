//! Import/export integration tests.
//!
//! Covers the exchange format from both directions:
//! - Export then import yields an equal document.
//! - Rejected imports never reach the session.
//! - File IO through a temporary directory.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use vs_editor::{Session, View};
use vs_gateway::{export, parse_import, read_import, ImportError};
use vs_model::PhaseId;
use vs_test_utils::{arb_document, rich_document};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

proptest! {
    /// Any valid document survives an export/import cycle unchanged.
    #[test]
    fn export_then_import_is_identity(doc in arb_document(1..6)) {
        let artifact = export(&doc, date()).unwrap();
        let restored = parse_import(&artifact.bytes).unwrap();
        prop_assert_eq!(restored, doc);
    }
}

/// Extra unknown keys in the payload are ignored.
#[test]
fn unknown_keys_are_ignored() {
    let json = br#"{
        "version": 3,
        "valueStream": {
            "name": "S",
            "phases": [{ "id": 1, "name": "A", "color": "red" }]
        }
    }"#;
    let doc = parse_import(json).unwrap();
    assert_eq!(doc.phases[0].name, "A");
}

/// A malformed file is reported and the session keeps its document.
#[test]
fn malformed_import_leaves_session_untouched() {
    let mut session = Session::new(rich_document(&[1, 2])).unwrap();
    let before = session.document().clone();

    let result = parse_import(br#"{"valueStream": {"name": "no phases"}}"#);

    match result {
        Ok(doc) => session.load_import(doc).unwrap(),
        Err(err) => assert!(err.is_malformed()),
    }
    assert_eq!(session.document(), &before);
    assert_eq!(session.view(), View::Editor);
}

/// A good file replaces the session document and shows the visualization.
#[test]
fn valid_import_replaces_session_document() {
    let mut session = Session::new(rich_document(&[1, 2])).unwrap();
    let artifact = export(&rich_document(&[7, 8, 9]), date()).unwrap();

    session.load_import(parse_import(&artifact.bytes).unwrap()).unwrap();

    assert_eq!(session.document().len(), 3);
    assert_eq!(session.active_phase_id(), PhaseId(7));
    assert_eq!(session.view(), View::Visualization);
}

/// An imported id of `u64::MAX` is kept, but adding after it is refused.
#[test]
fn add_after_max_id_import_keeps_ids_unique() {
    let mut session = Session::new(rich_document(&[1])).unwrap();
    let doc = parse_import(br#"{"valueStream": {"phases": [{"id": 18446744073709551615}]}}"#)
        .unwrap();
    session.load_import(doc).unwrap();

    let err = session.add_phase().unwrap_err();
    assert!(err.to_string().contains("no id left"));
    assert_eq!(session.document().len(), 1);
    assert_eq!(session.active_phase_id(), PhaseId(u64::MAX));
    assert!(vs_document::check_invariants(session.document()).is_ok());
}

/// Writing then reading through the filesystem keeps the document.
#[tokio::test]
async fn write_then_read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let doc = rich_document(&[3, 1, 2]);

    let artifact = export(&doc, date()).unwrap();
    let path = artifact.write_to(dir.path()).await.unwrap();

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("value-stream-data-2024-06-30.json")
    );
    assert_eq!(read_import(&path).await.unwrap(), doc);
}

/// Missing files surface as IO errors carrying the path.
#[tokio::test]
async fn reading_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = read_import(&path).await.unwrap_err();
    assert!(matches!(err, ImportError::Io { .. }));
}

/// Garbage on disk is a parse error.
#[tokio::test]
async fn reading_garbage_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.json");
    std::fs::write(&path, "not json at all").unwrap();
    let err = read_import(&path).await.unwrap_err();
    assert!(err.is_parse());
}
