//! Integration tests for the export command.

use crate::helpers::run_folio;

#[test]
fn export_emits_valid_json() {
    let (stdout, _stderr, exit_code) = run_folio(&["export"]);
    assert_eq!(exit_code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["name"], "Moazam Saif");
    assert!(value["roles"].as_array().unwrap().len() >= 4);
    assert_eq!(value["projects"].as_array().unwrap().len(), 4);
}

#[test]
fn export_pretty_is_indented() {
    let (stdout, _stderr, exit_code) = run_folio(&["export", "--pretty"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("\n  \"roles\""));
}

#[test]
fn export_round_trips_through_the_content_model() {
    let (stdout, _stderr, exit_code) = run_folio(&["export"]);
    assert_eq!(exit_code, 0);
    let profile: folio::Profile = serde_json::from_str(&stdout).expect("parses as Profile");
    assert!(!profile.experience.is_empty());
    assert!(!profile.contact.links.is_empty());
}
