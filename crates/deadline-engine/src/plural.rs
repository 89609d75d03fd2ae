//! Russian numeral-noun agreement.
//!
//! The noun after a Russian numeral declines by the count's last digits:
//! "1 день", "2 дня", "5 дней", but "11 дней" and "21 день". Both
//! rendering modes in [`crate::humanize`] select their day and hour words
//! through this module so they can never disagree on grammar.

use serde::Serialize;

/// The three noun forms a count can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluralForms {
    /// After 1, 21, 31, … ("день").
    pub one: &'static str,
    /// After 2–4, 22–24, … ("дня").
    pub few: &'static str,
    /// After 0, 5–20, 25–30, … ("дней").
    pub many: &'static str,
}

impl PluralForms {
    pub const fn new(one: &'static str, few: &'static str, many: &'static str) -> Self {
        Self { one, few, many }
    }

    /// Select the grammatically correct form for `count`.
    ///
    /// The count is reduced mod 100 first. Teens (11–19) always take the
    /// "many" form; otherwise the last digit decides: 1 → one, 2–4 → few,
    /// everything else (including 0) → many.
    ///
    /// # Examples
    ///
    /// ```
    /// use deadline_engine::plural::DAY_FORMS;
    ///
    /// assert_eq!(DAY_FORMS.select(1), "день");
    /// assert_eq!(DAY_FORMS.select(3), "дня");
    /// assert_eq!(DAY_FORMS.select(11), "дней");
    /// assert_eq!(DAY_FORMS.select(21), "день");
    /// ```
    pub fn select(&self, count: u64) -> &'static str {
        let n = count % 100;
        if (11..=19).contains(&n) {
            return self.many;
        }
        match n % 10 {
            1 => self.one,
            2..=4 => self.few,
            _ => self.many,
        }
    }
}

/// Forms for "день" (day).
pub const DAY_FORMS: PluralForms = PluralForms::new("день", "дня", "дней");

/// Forms for "час" (hour).
pub const HOUR_FORMS: PluralForms = PluralForms::new("час", "часа", "часов");

// ── Tests ───────────────────────────────────────────────────────────────────
