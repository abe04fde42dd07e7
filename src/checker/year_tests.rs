use super::*;

#[test]
fn parse_single_year() {
    assert_eq!(YearToken::parse("2024"), Some(YearToken::Single(2024)));
}

#[test]
fn parse_comma_range() {
    assert_eq!(
        YearToken::parse("2019, 2024"),
        Some(YearToken::Range(2019, 2024))
    );
}

#[test]
fn parse_rejects_other_shapes() {
    assert_eq!(YearToken::parse("2019-2024"), None);
    assert_eq!(YearToken::parse("2019,2024"), None);
    assert_eq!(YearToken::parse("24"), None);
    assert_eq!(YearToken::parse("20245"), None);
    assert_eq!(YearToken::parse("２０２４"), None);
    assert_eq!(YearToken::parse(""), None);
}

#[test]
fn display_round_trips_header_notation() {
    assert_eq!(YearToken::Single(2024).to_string(), "2024");
    assert_eq!(YearToken::Range(2019, 2024).to_string(), "2019, 2024");
}

#[test]
fn current_single_year_passes() {
    assert_eq!(validate_year(YearToken::Single(2024), 2024, false), Ok(()));
}

#[test]
fn last_year_fails_unless_bypassed() {
    assert_eq!(
        validate_year(YearToken::Single(2023), 2024, false),
        Err(HeaderError::Year {
            found: 2023,
            expected: 2024
        })
    );
    assert_eq!(validate_year(YearToken::Single(2023), 2024, true), Ok(()));
}

#[test]
fn range_ending_in_current_year_passes() {
    assert_eq!(
        validate_year(YearToken::Range(2019, 2024), 2024, false),
        Ok(())
    );
}

#[test]
fn range_starting_in_current_year_passes() {
    assert_eq!(
        validate_year(YearToken::Range(2024, 2019), 2024, false),
        Ok(())
    );
}

#[test]
fn stale_range_reports_first_year() {
    assert_eq!(
        validate_year(YearToken::Range(2019, 2024), 2025, false),
        Err(HeaderError::Year {
            found: 2019,
            expected: 2025
        })
    );
}

#[test]
fn range_around_current_year_fails() {
    // Years between the two ends of a range do not count.
    assert!(validate_year(YearToken::Range(2019, 2020), 2021, false).is_err());
    assert!(validate_year(YearToken::Range(2019, 2022), 2021, false).is_err());
}
