//! Rendering deadlines back into human-readable Russian text.
//!
//! Two independent presentation modes:
//!
//! - **verbose** — the creation-form preview, a relative phrase with the
//!   absolute date in parentheses: "через 2 дня 3 часа (15 января 2026)".
//! - **display** — the compact list label: "Сегодня", "Завтра",
//!   "Через 3 дня", or a short date like "15 янв.".
//!
//! Both are pure functions of the rendered instant and an explicit anchor.
//! The plain functions use the UTC calendar; the `_in_tz` variants take an
//! IANA timezone name and draw day boundaries there instead.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::DeadlineError;
use crate::expression::{DAY_MS, HOUR_MS};
use crate::plural::{DAY_FORMS, HOUR_FORMS};

/// Genitive month names for the long date ("15 января 2026").
const MONTHS_LONG: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Abbreviated month names for the compact label ("15 янв.").
const MONTHS_SHORT: [&str; 12] = [
    "янв.",
    "февр.",
    "мар.",
    "апр.",
    "мая",
    "июн.",
    "июл.",
    "авг.",
    "сент.",
    "окт.",
    "нояб.",
    "дек.",
];

// ── Verbose mode ────────────────────────────────────────────────────────────

/// Render a deadline as the verbose preview, e.g.
/// "через 2 дня 3 часа (15 января 2026)".
///
/// Whole days come first; the hour remainder is appended only when
/// nonzero. Anything under an hour ahead of the anchor (including
/// instants not after it at all) renders as "менее часа". The
/// parenthesized absolute date uses the UTC calendar; see
/// [`format_deadline_verbose_in_tz`] for a zone-aware rendering.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use deadline_engine::format_deadline_verbose;
///
/// let anchor = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
/// let text = format_deadline_verbose(anchor + Duration::hours(1), anchor);
/// assert_eq!(text, "через 1 час (1 января 2024)");
/// ```
pub fn format_deadline_verbose(date: DateTime<Utc>, anchor: DateTime<Utc>) -> String {
    format!("{} ({})", relative_phrase(date, anchor), long_date(&date))
}

/// [`format_deadline_verbose`] with the absolute date rendered in an IANA
/// timezone.
///
/// # Errors
///
/// Returns [`DeadlineError::InvalidTimezone`] if `timezone` is not a
/// valid IANA name.
pub fn format_deadline_verbose_in_tz(
    date: DateTime<Utc>,
    anchor: DateTime<Utc>,
    timezone: &str,
) -> Result<String, DeadlineError> {
    let tz = parse_timezone(timezone)?;
    Ok(format!(
        "{} ({})",
        relative_phrase(date, anchor),
        long_date(&date.with_timezone(&tz))
    ))
}

fn relative_phrase(date: DateTime<Utc>, anchor: DateTime<Utc>) -> String {
    let diff_ms = (date - anchor).num_milliseconds().max(0);
    let days = diff_ms / DAY_MS;
    let hours = (diff_ms % DAY_MS) / HOUR_MS;

    if days > 0 {
        let mut phrase = format!("через {days} {}", DAY_FORMS.select(days as u64));
        if hours > 0 {
            phrase.push_str(&format!(" {hours} {}", HOUR_FORMS.select(hours as u64)));
        }
        phrase
    } else if hours > 0 {
        format!("через {hours} {}", HOUR_FORMS.select(hours as u64))
    } else {
        "менее часа".to_string()
    }
}

fn long_date<T: Datelike>(date: &T) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_LONG[date.month0() as usize],
        date.year()
    )
}

fn short_date<T: Datelike>(date: &T) -> String {
    format!("{} {}", date.day(), MONTHS_SHORT[date.month0() as usize])
}

// ── Display mode ────────────────────────────────────────────────────────────

/// Render a stored ISO deadline as the compact list label.
///
/// Calendar dates (not instants) are compared against the anchor: the
/// anchor's own date is "Сегодня", the next is "Завтра", two to seven
/// days out is "Через N дней", and everything else (past dates included)
/// is a short date with no year, e.g. "15 янв.". Day boundaries are drawn
/// on the UTC calendar; see [`format_deadline_display_in_tz`].
///
/// # Errors
///
/// Returns [`DeadlineError::InvalidDatetime`] if `iso_date` is not a
/// parseable RFC 3339 datetime. Stored deadlines are produced by
/// [`crate::parse_expression`] and always parse, so an error here means
/// the record itself is corrupt.
pub fn format_deadline_display(
    iso_date: &str,
    anchor: DateTime<Utc>,
) -> Result<String, DeadlineError> {
    let date = parse_iso(iso_date)?;
    Ok(display_label(date.date_naive(), anchor.date_naive()))
}

/// [`format_deadline_display`] with day boundaries drawn in an IANA
/// timezone.
///
/// # Errors
///
/// Returns [`DeadlineError::InvalidDatetime`] for an unparseable
/// `iso_date`, or [`DeadlineError::InvalidTimezone`] for an unknown
/// timezone name.
pub fn format_deadline_display_in_tz(
    iso_date: &str,
    anchor: DateTime<Utc>,
    timezone: &str,
) -> Result<String, DeadlineError> {
    let tz = parse_timezone(timezone)?;
    let date = parse_iso(iso_date)?;
    Ok(display_label(
        date.with_timezone(&tz).date_naive(),
        anchor.with_timezone(&tz).date_naive(),
    ))
}

fn display_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff_days = (date - today).num_days();
    match diff_days {
        0 => "Сегодня".to_string(),
        1 => "Завтра".to_string(),
        2..=7 => format!("Через {diff_days} {}", DAY_FORMS.select(diff_days as u64)),
        _ => short_date(&date),
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn parse_iso(s: &str) -> Result<DateTime<Utc>, DeadlineError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DeadlineError::InvalidDatetime(format!("'{s}': {e}")))
}

fn parse_timezone(s: &str) -> Result<Tz, DeadlineError> {
    s.parse::<Tz>()
        .map_err(|_| DeadlineError::InvalidTimezone(format!("'{s}'")))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 12, 10, 0, 0).unwrap()
    }

    fn iso(dt: DateTime<Utc>) -> String {
        dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }

    // ── verbose mode ────────────────────────────────────────────────────

    #[test]
    fn test_verbose_days_and_hours() {
        let date = anchor() + Duration::days(2) + Duration::hours(3);
        assert_eq!(
            format_deadline_verbose(date, anchor()),
            "через 2 дня 3 часа (14 января 2026)"
        );
    }

    #[test]
    fn test_verbose_whole_days_omit_hour_remainder() {
        let date = anchor() + Duration::days(5);
        assert_eq!(
            format_deadline_verbose(date, anchor()),
            "через 5 дней (17 января 2026)"
        );
    }

    #[test]
    fn test_verbose_hours_only() {
        let date = anchor() + Duration::hours(1);
        assert_eq!(
            format_deadline_verbose(date, anchor()),
            "через 1 час (12 января 2026)"
        );
    }

    #[test]
    fn test_verbose_under_an_hour() {
        let date = anchor() + Duration::minutes(30);
        assert_eq!(
            format_deadline_verbose(date, anchor()),
            "менее часа (12 января 2026)"
        );
    }

    #[test]
    fn test_verbose_anchor_itself_is_under_an_hour() {
        assert_eq!(
            format_deadline_verbose(anchor(), anchor()),
            "менее часа (12 января 2026)"
        );
    }

    #[test]
    fn test_verbose_pluralizes_day_word() {
        let date = anchor() + Duration::days(21);
        assert_eq!(
            format_deadline_verbose(date, anchor()),
            "через 21 день (2 февраля 2026)"
        );

        let date = anchor() + Duration::days(12);
        assert_eq!(
            format_deadline_verbose(date, anchor()),
            "через 12 дней (24 января 2026)"
        );
    }

    #[test]
    fn test_verbose_partial_hours_are_truncated() {
        // 2 days 3 hours 40 minutes still reads as "2 дня 3 часа"
        let date = anchor() + Duration::days(2) + Duration::hours(3) + Duration::minutes(40);
        assert_eq!(
            format_deadline_verbose(date, anchor()),
            "через 2 дня 3 часа (14 января 2026)"
        );
    }

    #[test]
    fn test_verbose_in_tz_shifts_the_absolute_date() {
        // 23:30 UTC on Jan 12 is already Jan 13 in Moscow
        let late = Utc.with_ymd_and_hms(2026, 1, 12, 23, 30, 0).unwrap();
        let date = late + Duration::minutes(10);
        let utc = format_deadline_verbose(date, late);
        assert_eq!(utc, "менее часа (12 января 2026)");

        let moscow = format_deadline_verbose_in_tz(date, late, "Europe/Moscow").unwrap();
        assert_eq!(moscow, "менее часа (13 января 2026)");
    }

    #[test]
    fn test_verbose_in_tz_rejects_unknown_zone() {
        let err = format_deadline_verbose_in_tz(anchor(), anchor(), "Nowhere/Special");
        assert!(matches!(err, Err(DeadlineError::InvalidTimezone(_))));
    }

    // ── display mode ────────────────────────────────────────────────────

    #[test]
    fn test_display_today() {
        // same calendar date, different time of day
        let date = Utc.with_ymd_and_hms(2026, 1, 12, 23, 59, 0).unwrap();
        assert_eq!(
            format_deadline_display(&iso(date), anchor()).unwrap(),
            "Сегодня"
        );
    }

    #[test]
    fn test_display_tomorrow() {
        let date = Utc.with_ymd_and_hms(2026, 1, 13, 1, 0, 0).unwrap();
        assert_eq!(
            format_deadline_display(&iso(date), anchor()).unwrap(),
            "Завтра"
        );
    }

    #[test]
    fn test_display_within_a_week() {
        let date = anchor() + Duration::days(3);
        assert_eq!(
            format_deadline_display(&iso(date), anchor()).unwrap(),
            "Через 3 дня"
        );

        let date = anchor() + Duration::days(7);
        assert_eq!(
            format_deadline_display(&iso(date), anchor()).unwrap(),
            "Через 7 дней"
        );
    }

    #[test]
    fn test_display_beyond_a_week_is_a_short_date() {
        let date = anchor() + Duration::days(8);
        assert_eq!(
            format_deadline_display(&iso(date), anchor()).unwrap(),
            "20 янв."
        );
    }

    #[test]
    fn test_display_past_dates_fall_through_to_short_date() {
        let date = anchor() - Duration::days(10);
        assert_eq!(
            format_deadline_display(&iso(date), anchor()).unwrap(),
            "2 янв."
        );
    }

    #[test]
    fn test_display_counts_calendar_days_not_instants() {
        // 22 hours ahead but across midnight: a calendar day apart
        let late = Utc.with_ymd_and_hms(2026, 1, 12, 23, 0, 0).unwrap();
        let date = late + Duration::hours(22);
        assert_eq!(format_deadline_display(&iso(date), late).unwrap(), "Завтра");
    }

    #[test]
    fn test_display_crosses_month_boundaries() {
        let eom = Utc.with_ymd_and_hms(2026, 1, 30, 9, 0, 0).unwrap();
        let date = eom + Duration::days(3);
        assert_eq!(
            format_deadline_display(&iso(date), eom).unwrap(),
            "Через 3 дня"
        );
    }

    #[test]
    fn test_display_accepts_offset_datetimes() {
        // +03:00 offset, same instant as Jan 13 21:30 UTC
        let label = format_deadline_display("2026-01-14T00:30:00+03:00", anchor()).unwrap();
        assert_eq!(label, "Завтра");
    }

    #[test]
    fn test_display_in_tz_flips_across_local_midnight() {
        let late = Utc.with_ymd_and_hms(2026, 1, 12, 23, 30, 0).unwrap();
        let date = late + Duration::hours(1);

        assert_eq!(format_deadline_display(&iso(date), late).unwrap(), "Завтра");
        // Moscow is UTC+3: both instants are already Jan 13 there
        assert_eq!(
            format_deadline_display_in_tz(&iso(date), late, "Europe/Moscow").unwrap(),
            "Сегодня"
        );
    }

    #[test]
    fn test_display_rejects_malformed_input() {
        let err = format_deadline_display("not-a-datetime", anchor());
        assert!(matches!(err, Err(DeadlineError::InvalidDatetime(_))));
        let msg = err.unwrap_err().to_string();
        assert!(msg.contains("Invalid datetime"), "got: {msg}");
    }

    #[test]
    fn test_display_rejects_empty_input() {
        assert!(format_deadline_display("", anchor()).is_err());
    }

    #[test]
    fn test_display_rejects_bare_dates() {
        // a date without a time is not a stored deadline
        assert!(format_deadline_display("2026-01-15", anchor()).is_err());
    }
}
