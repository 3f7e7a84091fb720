// Status classifier tests

use citadel_dash::status::{SeverityTier, classify};

#[test]
fn sick_is_error_in_any_case() {
    assert_eq!(classify("sick"), SeverityTier::Error);
    assert_eq!(classify("SICK"), SeverityTier::Error);
    assert_eq!(classify("Sick"), SeverityTier::Error);
}

#[test]
fn stale_is_warning() {
    assert_eq!(classify("stale"), SeverityTier::Warning);
    assert_eq!(classify("STALE"), SeverityTier::Warning);
}

#[test]
fn everything_else_is_positive() {
    for s in ["", "healthy", "running", "sickly", "unknown", "  ", "ñ"] {
        assert_eq!(classify(s), SeverityTier::Positive, "status {:?}", s);
    }
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(classify(" sick\n"), SeverityTier::Error);
}

#[test]
fn tier_serializes_as_css_class() {
    assert_eq!(serde_json::to_string(&SeverityTier::Positive).unwrap(), "\"positive\"");
    assert_eq!(serde_json::to_string(&SeverityTier::Warning).unwrap(), "\"warning\"");
    assert_eq!(serde_json::to_string(&SeverityTier::Error).unwrap(), "\"error\"");
}

#[test]
fn tier_parse_is_case_insensitive() {
    assert_eq!("Error".parse::<SeverityTier>().unwrap(), SeverityTier::Error);
    assert!("fatal".parse::<SeverityTier>().is_err());
}
