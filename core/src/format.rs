//! Display formatting for transaction fields.
//!
//! All functions are pure: the same input always yields the same output.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::FormatError;
use crate::types::Amount;

/// Currency glyph prefixed to every amount.
pub const CURRENCY_SYMBOL: char = '£';

/// `%#z` accepts `Z`, `+HH`, `+HHMM` and `+HH:MM`.
const OFFSET_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Format an ISO-8601 timestamp as `HH:MM - DD/MM/YYYY` in UTC.
///
/// Accepts RFC 3339 with any offset, minute precision or basic `+HHMM`
/// offsets, a date-time without offset (read as UTC), or a bare date (UTC
/// midnight).
pub fn format_date(iso: &str) -> Result<String, FormatError> {
    let parsed = parse_utc(iso.trim()).ok_or_else(|| FormatError::InvalidDate(iso.to_string()))?;
    Ok(parsed.format("%H:%M - %d/%m/%Y").to_string())
}

fn parse_utc(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in OFFSET_DATE_TIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(input, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Prefix the trimmed amount with the currency glyph. No rounding.
pub fn format_amount(amount: &Amount) -> String {
    format_amount_str(&amount.to_string())
}

pub fn format_amount_str(amount: &str) -> String {
    format!("{CURRENCY_SYMBOL}{}", amount.trim())
}

/// Lowercase the text, then uppercase the first character of every
/// space-separated word. Runs of spaces are kept as they are.
pub fn capitalise_words(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(capitalise_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalise_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_uses_utc_fields() {
        assert_eq!(format_date("2024-03-05T14:07:00Z").unwrap(), "14:07 - 05/03/2024");
        assert_eq!(format_date("2024-12-31T23:59:59.999Z").unwrap(), "23:59 - 31/12/2024");
    }

    #[test]
    fn date_converts_offsets_to_utc() {
        assert_eq!(format_date("2024-03-05T01:30:00+02:00").unwrap(), "23:30 - 04/03/2024");
        assert_eq!(format_date("2023-12-31T20:15:00-05:00").unwrap(), "01:15 - 01/01/2024");
    }

    #[test]
    fn date_accepts_minute_precision_and_basic_offsets() {
        assert_eq!(format_date("2024-03-05T14:07Z").unwrap(), "14:07 - 05/03/2024");
        assert_eq!(format_date("2024-03-05T14:07+01:00").unwrap(), "13:07 - 05/03/2024");
        assert_eq!(format_date("2024-03-05T14:07:00.000+0000").unwrap(), "14:07 - 05/03/2024");
        assert_eq!(format_date("2024-03-05T14:07:00-0130").unwrap(), "15:37 - 05/03/2024");
    }

    #[test]
    fn date_without_offset_is_read_as_utc() {
        assert_eq!(format_date("2024-07-09T08:05:00").unwrap(), "08:05 - 09/07/2024");
        assert_eq!(format_date("2024-07-09T08:05").unwrap(), "08:05 - 09/07/2024");
        assert_eq!(format_date("2024-07-09").unwrap(), "00:00 - 09/07/2024");
    }

    #[test]
    fn date_pads_small_years() {
        assert_eq!(format_date("0999-01-02T03:04:00Z").unwrap(), "03:04 - 02/01/0999");
    }

    #[test]
    fn unparseable_date_is_an_error() {
        assert_eq!(
            format_date("yesterday"),
            Err(FormatError::InvalidDate("yesterday".to_string()))
        );
        assert!(format_date("").is_err());
        assert!(format_date("2024-13-01T00:00:00Z").is_err());
    }

    #[test]
    fn amount_is_trimmed_and_prefixed() {
        assert_eq!(format_amount_str(" 80.50 "), "£80.50");
        assert_eq!(format_amount(&Amount::from(42)), "£42");
        assert_eq!(format_amount(&Amount::from("\t7.1\n")), "£7.1");
    }

    #[test]
    fn amount_is_not_validated_or_rounded() {
        assert_eq!(format_amount_str("12.3456"), "£12.3456");
        assert_eq!(format_amount_str("-5"), "£-5");
        assert_eq!(format_amount_str("n/a"), "£n/a");
    }

    #[test]
    fn capitalises_each_word() {
        assert_eq!(capitalise_words("GROCERY store"), "Grocery Store");
        assert_eq!(capitalise_words("eating out"), "Eating Out");
        assert_eq!(capitalise_words("tRAVEL"), "Travel");
    }

    #[test]
    fn keeps_empty_words_from_repeated_spaces() {
        assert_eq!(capitalise_words("bills  and   fees"), "Bills  And   Fees");
        assert_eq!(capitalise_words(" leading"), " Leading");
        assert_eq!(capitalise_words(""), "");
    }

    #[test]
    fn word_count_matches_single_space_split() {
        for input in ["a b c", "  x  ", "one", "MiXeD cAsE wOrDs here", ""] {
            let output = capitalise_words(input);
            assert_eq!(output.split(' ').count(), input.split(' ').count(), "{input:?}");
        }
    }

    #[test]
    fn handles_non_ascii() {
        assert_eq!(capitalise_words("éCOLE café"), "École Café");
    }

    #[test]
    fn formatting_is_repeatable() {
        let first = (format_date("2024-03-05T14:07:00Z"), capitalise_words("GROCERY store"));
        let second = (format_date("2024-03-05T14:07:00Z"), capitalise_words("GROCERY store"));
        assert_eq!(first, second);
    }
}
