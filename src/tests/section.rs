use super::{canonical_heading, is_section_number, SectionEntry};
use crate::error::ConfigError;

#[test]
fn test_section_numbers() {
    for ok in ["1", "1.4", "2.1.15", "10.0.3"] {
        assert!(is_section_number(ok), "{ok} should be accepted");
    }
    for bad in ["", ".", "1.", ".1", "1..2", "1.a", "v1.2", "1.2 "] {
        assert!(!is_section_number(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn test_heading_format() {
    assert_eq!(
        canonical_heading("1.5", "Practice Quiz: Plan AI Solutions (20-25%)"),
        "# 1.5 Practice Quiz: Plan AI Solutions (20-25%)"
    );
    let entry = SectionEntry::new("src/a.md", "2.1.5", "Design Task Agents");
    assert_eq!(entry.heading(), "# 2.1.5 Design Task Agents");
}

#[test]
fn test_validate() {
    assert!(SectionEntry::new("src/a.md", "1.2", "Title").validate().is_ok());

    let err = SectionEntry::new("src/a.md", "1.x", "Title")
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEntry { ref path, .. } if path == "src/a.md"));

    assert!(SectionEntry::new("src/a.md", "1.2", "   ").validate().is_err());
    assert!(SectionEntry::new("", "1.2", "Title").validate().is_err());
}
