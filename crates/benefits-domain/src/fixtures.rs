//! Seed data and read-only fixture loading.

use std::path::Path;

use chrono::NaiveDate;

use crate::amount::CadAmount;
use crate::error::DomainError;
use crate::model::{validate_benefits, Benefit, Charge};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

fn cad(dollars: u64) -> CadAmount {
    CadAmount::from_dollars(dollars)
}

/// The four benefits every session starts with.
pub fn seed_benefits() -> Vec<Benefit> {
    vec![
        Benefit::new("b1", "Psychiatrist", cad(1000), cad(600), ymd(2026, 1, 1)).with_charges(vec![
            Charge::new("c1", ymd(2025, 3, 4), "Dr. M. Rivers", cad(160)).with_notes("Initial consult"),
            Charge::new("c2", ymd(2025, 5, 1), "Dr. M. Rivers", cad(120)).with_notes("Follow-up"),
        ]),
        Benefit::new("b2", "Physiotherapy", cad(500), cad(120), ymd(2026, 1, 1)).with_charges(vec![
            Charge::new("c3", ymd(2025, 2, 18), "City Physio", cad(90)),
            Charge::new("c4", ymd(2025, 6, 22), "City Physio", cad(110)).with_notes("Shoulder"),
            Charge::new("c5", ymd(2025, 9, 1), "Peak Performance", cad(180)).with_notes("Ankle"),
        ]),
        Benefit::new("b3", "Chiropractor", cad(300), cad(300), ymd(2026, 1, 1)),
        Benefit::new("b4", "Dental", cad(1500), cad(900), ymd(2026, 1, 1)).with_charges(vec![
            Charge::new("c6", ymd(2025, 4, 10), "Yaletown Dental", cad(250)).with_notes("Cleaning + x-rays"),
            Charge::new("c7", ymd(2025, 7, 15), "Yaletown Dental", cad(350)).with_notes("Filling"),
        ]),
    ]
}

/// Parses and validates a fixture set from JSON bytes.
pub fn parse_benefits(bytes: &[u8]) -> Result<Vec<Benefit>, DomainError> {
    let benefits: Vec<Benefit> = serde_json::from_slice(bytes)?;
    validate_benefits(&benefits)?;
    Ok(benefits)
}

/// Reads a fixture set from disk. Nothing is ever written back.
pub fn load_benefits(path: &Path) -> Result<Vec<Benefit>, DomainError> {
    let benefits = parse_benefits(&std::fs::read(path)?)?;
    tracing::info!(path = %path.display(), count = benefits.len(), "loaded benefit fixtures");
    Ok(benefits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_set_is_valid() {
        let benefits = seed_benefits();
        assert_eq!(benefits.len(), 4);
        assert!(validate_benefits(&benefits).is_ok());
    }

    #[test]
    fn seed_set_survives_json() {
        let json = serde_json::to_vec_pretty(&seed_benefits()).unwrap();
        assert_eq!(parse_benefits(&json).unwrap(), seed_benefits());
    }

    #[test]
    fn parse_rejects_inconsistent_balance() {
        let raw = br#"[{"id":"x","name":"Vision","total":100,"remaining":150,"renewDate":"2026-01-01"}]"#;
        assert!(matches!(parse_benefits(raw), Err(DomainError::RemainingExceedsTotal { .. })));
    }

    #[test]
    fn parse_defaults_missing_charges() {
        let raw = br#"[{"id":"x","name":"Vision","total":100,"remaining":100,"renewDate":"2026-01-01"}]"#;
        let benefits = parse_benefits(raw).unwrap();
        assert!(benefits[0].charges.is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_benefits(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DomainError::Io(_)));
    }
}
