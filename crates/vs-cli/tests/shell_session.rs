//! End-to-end shell tests.
//!
//! Scripts are fed through `Shell::run` with an in-memory stdin, so the
//! deletion prompt reads its answer from the same script.

use pretty_assertions::assert_eq;
use std::io::Cursor;
use vs_cli::{AppConfig, Shell};
use vs_editor::View;
use vs_model::{MetadataField, PhaseId};
use vs_test_utils::rich_document;

async fn run(shell: &mut Shell, script: &str) -> String {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    shell.run(&mut input, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

fn shell(ids: &[u64]) -> Shell {
    Shell::new(rich_document(ids), &AppConfig::default()).unwrap()
}

/// A declined prompt leaves the phase in place; a yes removes it.
#[tokio::test]
async fn delete_asks_for_confirmation() {
    let mut s = shell(&[1, 2]);

    let out = run(&mut s, "delete-phase 1\nn\n").await;
    assert!(out.contains("Delete phase 1 'Phase 1'? [y/N]"));
    assert!(out.contains("deletion cancelled"));
    assert_eq!(s.session().document().len(), 2);

    let out = run(&mut s, "delete-phase 1\ny\n").await;
    assert!(out.contains("deleted phase 1; editing phase 2"));
    assert_eq!(s.session().active_phase_id(), PhaseId(2));
}

/// With confirmation disabled nothing is asked.
#[tokio::test]
async fn delete_without_confirmation() {
    let config = AppConfig::default().with_confirm_deletes(false);
    let mut s = Shell::new(rich_document(&[1, 2]), &config).unwrap();
    let out = run(&mut s, "delete-phase 2\n").await;
    assert!(!out.contains("[y/N]"));
    assert_eq!(s.session().document().len(), 1);
}

/// The last phase is refused with an error and the loop continues.
#[tokio::test]
async fn last_phase_error_does_not_stop_shell() {
    let mut s = shell(&[1]);
    let out = run(&mut s, "delete-phase\nadd-phase\n").await;
    assert!(out.contains("error: cannot delete phase 1"));
    assert!(out.contains("added phase 2"));
    assert_eq!(s.session().document().len(), 2);
}

/// Editing commands write through to the document.
#[tokio::test]
async fn edits_reach_the_document() {
    let mut s = shell(&[1, 2]);
    let script = "\
tab 2
title   Build & Test
meta owner Dev Lead
stakeholder add QA Guild
stakeholder rm 0
row add metrics
cell metrics 1 target < 1 day
row rm inputs 0
";
    let out = run(&mut s, script).await;
    assert!(out.contains("renamed to 'Build & Test'"));

    let phase = s.session().document().phase(PhaseId(2)).unwrap();
    assert_eq!(phase.name, "Build & Test");
    assert_eq!(phase.metadata.get(MetadataField::PhaseOwner), "Dev Lead");
    assert_eq!(phase.metadata.key_stakeholders, vec!["PMO", "QA Guild"]);
    assert_eq!(phase.metrics.len(), 2);
    assert_eq!(phase.metrics[1].target, "< 1 day");
    assert_eq!(phase.inputs.len(), 3);
    // first phase untouched
    assert_eq!(s.session().document().phases[0], rich_document(&[1]).phases[0]);
}

/// Bad input is reported and the session keeps going.
#[tokio::test]
async fn parse_and_table_errors_are_reported() {
    let mut s = shell(&[1]);
    let out = run(&mut s, "frobnicate\nrow rm inputs 9\ncell inputs 0 colour red\nquit\nadd-phase\n").await;
    assert!(out.contains("error: unknown command 'frobnicate'"));
    assert!(out.contains("row 9 out of range"));
    assert!(out.contains("unknown field: 'colour'"));
    // quit stops before add-phase
    assert_eq!(s.session().document().len(), 1);
}

/// Illustration click lands in a focused visualization with details.
#[tokio::test]
async fn click_from_illustration_focuses_visualization() {
    let mut s = shell(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let out = run(&mut s, "view illustrate\nclick 3\n").await;

    assert_eq!(s.session().view(), View::Visualization);
    assert_eq!(s.session().focused(), Some(PhaseId(3)));
    assert!(s.panel().is_open());
    assert!(out.contains("Focused on Phase 3: Phase 3"));
    assert!(out.contains("== Phase 3: Phase 3 =="));

    run(&mut s, "clear-focus\n").await;
    assert_eq!(s.session().focused(), None);
    assert!(!s.panel().is_open());
}

/// Clicking the same phase again after closing the panel reopens it.
#[tokio::test]
async fn reclick_after_close_reopens_panel() {
    let mut s = shell(&[1, 2, 3, 4]);
    run(&mut s, "view illustrate\nclick 3\nclose\n").await;
    assert_eq!(s.session().focused(), Some(PhaseId(3)));
    assert!(!s.panel().is_open());

    let out = run(&mut s, "view illustrate\nclick 3\n").await;
    assert_eq!(s.session().view(), View::Visualization);
    assert!(s.panel().is_open());
    assert_eq!(s.panel().selected(), Some(PhaseId(3)));
    assert!(out.contains("== Phase 3: Phase 3 =="));
}

/// Export then import through a temp directory.
#[tokio::test]
async fn export_then_import_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut s = shell(&[1, 2, 3]);
    let out = run(&mut s, &format!("export {}\n", dir.path().display())).await;
    assert!(out.contains("exported to"));

    let path = std::fs::read_dir(dir.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let exported = s.session().document().clone();

    let mut other = shell(&[9]);
    let out = run(&mut other, &format!("import {}\n", path.display())).await;
    assert!(out.contains("imported 3 phases"));
    assert_eq!(other.session().document(), &exported);
    assert_eq!(other.session().view(), View::Visualization);
    assert_eq!(other.session().active_phase_id(), PhaseId(1));
}

/// A malformed import file leaves the document alone.
#[tokio::test]
async fn malformed_import_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"valueStream": {"name": "x"}}"#).unwrap();

    let mut s = shell(&[1, 2]);
    let before = s.session().document().clone();
    let out = run(&mut s, &format!("import {}\n", path.display())).await;

    assert!(out.contains("invalid file format"));
    assert_eq!(s.session().document(), &before);
    assert_eq!(s.session().view(), View::Editor);
}
