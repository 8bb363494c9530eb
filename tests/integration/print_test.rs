//! Integration tests for the print command.

use crate::helpers::run_folio;

#[test]
fn print_shows_every_section() {
    let (stdout, _stderr, exit_code) = run_folio(&["print", "--width", "80"]);
    assert_eq!(exit_code, 0);
    for heading in ["EXPERIENCE", "SKILLS", "PROJECTS", "EDUCATION", "CONTACT"] {
        assert!(stdout.contains(heading), "missing {} heading", heading);
    }
}

#[test]
fn print_shows_identity_and_contact_details() {
    let (stdout, _stderr, exit_code) = run_folio(&["print", "--width", "80"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Moazam Saif"));
    assert!(stdout.contains("saifmoazam9@gmail.com"));
    assert!(stdout.contains("Islamabad, Pakistan"));
}

#[test]
fn print_accepts_narrow_widths() {
    let (stdout, _stderr, exit_code) = run_folio(&["print", "--width", "40"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Moazam Saif"));
}
