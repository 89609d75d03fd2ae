//! Free-form deadline expression parsing.
//!
//! Maps a human-typed Russian offset expression ("2 дня", "30 минут",
//! "1 неделя") onto an absolute future instant. Resolution runs two
//! ordered strategies: an exact lookup against the fixed phrase table
//! backing the quick-pick control, then a generic `<число> <единица>`
//! pattern over every recognized unit inflection. If neither matches, the
//! result is `None` and the caller decides whether the text was a literal
//! date or garbage.
//!
//! All functions take the "now" anchor explicitly. Nothing in this module
//! reads the system clock, so a single call is internally consistent and
//! tests need no clock freezing.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::Serialize;

use crate::humanize::format_deadline_verbose;

// ── Units ───────────────────────────────────────────────────────────────────

pub(crate) const MINUTE_MS: i64 = 60 * 1000;
pub(crate) const HOUR_MS: i64 = 60 * MINUTE_MS;
pub(crate) const DAY_MS: i64 = 24 * HOUR_MS;
pub(crate) const WEEK_MS: i64 = 7 * DAY_MS;
/// A month is a fixed 30 days. Deadline offsets are approximate; what
/// "1 месяц" resolves to must not depend on which calendar month it is
/// typed in.
pub(crate) const MONTH_MS: i64 = 30 * DAY_MS;

/// A time unit recognized by the generic pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl Unit {
    /// Fixed millisecond length of one unit.
    const fn millis(self) -> i64 {
        match self {
            Unit::Minute => MINUTE_MS,
            Unit::Hour => HOUR_MS,
            Unit::Day => DAY_MS,
            Unit::Week => WEEK_MS,
            Unit::Month => MONTH_MS,
        }
    }

    /// Recognize a case-inflected unit word.
    fn from_word(word: &str) -> Option<Unit> {
        match word {
            "минут" | "минуты" | "минуту" => Some(Unit::Minute),
            "час" | "часа" | "часов" => Some(Unit::Hour),
            "день" | "дня" | "дней" => Some(Unit::Day),
            "недел" | "недели" | "неделю" | "недель" => Some(Unit::Week),
            "месяц" | "месяца" | "месяцев" => Some(Unit::Month),
            _ => None,
        }
    }
}

// ── Phrase table ────────────────────────────────────────────────────────────

/// The quick-pick phrases, in picker order: minutes, hours, days, weeks,
/// months, ascending within each unit.
///
/// Lookup is an exact string match, not a pattern. Nominative forms like
/// "1 неделя" do not decline the way the generic pattern expects, so they
/// must short-circuit here.
const PHRASES: [(&str, i64); 12] = [
    ("30 минут", 30 * MINUTE_MS),
    ("1 час", HOUR_MS),
    ("2 часа", 2 * HOUR_MS),
    ("1 день", DAY_MS),
    ("2 дня", 2 * DAY_MS),
    ("5 дней", 5 * DAY_MS),
    ("1 неделя", WEEK_MS),
    ("2 недели", 2 * WEEK_MS),
    ("5 недель", 5 * WEEK_MS),
    ("1 месяц", MONTH_MS),
    ("2 месяца", 2 * MONTH_MS),
    ("5 месяцев", 5 * MONTH_MS),
];

/// One quick-pick deadline option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Text shown in the selection control.
    pub label: &'static str,
    /// Expression submitted when picked; always parses.
    pub value: &'static str,
}

/// The fixed quick-pick options, in phrase-table order.
pub fn predefined_expressions() -> Vec<Preset> {
    PHRASES
        .iter()
        .map(|&(phrase, _)| Preset {
            label: phrase,
            value: phrase,
        })
        .collect()
}

// ── Parsing ─────────────────────────────────────────────────────────────────

/// A successfully parsed deadline.
///
/// `date` and `iso_string` name the same instant; `iso_string` is the
/// canonical persisted form (UTC, millisecond precision, `Z` suffix).
/// `formatted` is a verbose rendering computed against the parse-time
/// anchor. It is a snapshot that goes stale; callers that need live
/// relative text should call [`format_deadline_verbose`] again instead
/// of reusing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDeadline {
    pub date: DateTime<Utc>,
    pub iso_string: String,
    pub formatted: String,
}

/// Parse a free-form deadline expression against an explicit anchor.
///
/// The input is trimmed and lower-cased (Unicode-aware, which covers
/// Cyrillic), then resolved: exact phrase table first, generic
/// `<digits> <unit-word>` pattern second. Anything unrecognized yields
/// `None` so the caller can fall back to interpreting the text as a
/// literal date; that includes empty input and unknown unit words, and
/// also numbers that are signed or overflow. This function never panics
/// and never errors.
///
/// Every recognized expression is a non-negative offset, so the result is
/// never before `anchor`; `"0 дней"` is a valid zero offset.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use deadline_engine::parse_expression;
///
/// let anchor = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let parsed = parse_expression("2 дня", anchor).unwrap();
/// assert_eq!(parsed.iso_string, "2024-01-03T00:00:00.000Z");
///
/// assert!(parse_expression("через неделю", anchor).is_none());
/// ```
pub fn parse_expression(input: &str, anchor: DateTime<Utc>) -> Option<ParsedDeadline> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    let offset_ms = lookup_phrase(&normalized).or_else(|| match_generic(&normalized))?;
    let date = anchor.checked_add_signed(Duration::milliseconds(offset_ms))?;

    Some(ParsedDeadline {
        date,
        iso_string: date.to_rfc3339_opts(SecondsFormat::Millis, true),
        formatted: format_deadline_verbose(date, anchor),
    })
}

fn lookup_phrase(s: &str) -> Option<i64> {
    PHRASES
        .iter()
        .find(|&&(phrase, _)| phrase == s)
        .map(|&(_, ms)| ms)
}

/// The `^(\d+)\s+(unit-word)$` pattern: exactly two whitespace-separated
/// tokens, the first entirely ASCII digits. An explicit sign is a
/// non-match, and any overflow is treated as unrecognized.
fn match_generic(s: &str) -> Option<i64> {
    let mut tokens = s.split_whitespace();
    let number = tokens.next()?;
    let word = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let n: i64 = number.parse().ok()?;
    n.checked_mul(Unit::from_word(word)?.millis())
}

// ── Tests ───────────────────────────────────────────────────────────────────
