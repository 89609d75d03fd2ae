//! # deadline-engine
//!
//! Deterministic deadline expressions for task trackers.
//!
//! Users type deadlines in free-form Russian ("2 дня", "30 минут",
//! "1 неделя"); the engine resolves them into absolute instants, then
//! later renders those instants back as grammatically correct text. Every
//! function takes the "now" anchor as an explicit parameter instead of
//! reading the system clock, so each call is a pure function of its inputs
//! and tests need no clock mocking.
//!
//! # Design Principle
//!
//! The parser never guesses and never throws: an expression either matches
//! the fixed phrase table or the generic `<число> <единица>` pattern, or
//! the result is `None` and the caller decides what the text meant.
//!
//! ## Modules
//!
//! - [`expression`] — free-form expression → absolute future instant
//! - [`humanize`] — instant → verbose preview / compact list label
//! - [`plural`] — Russian numeral-noun agreement
//! - [`error`] — error types

pub mod error;
pub mod expression;
pub mod humanize;
pub mod plural;

pub use error::DeadlineError;
pub use expression::{parse_expression, predefined_expressions, ParsedDeadline, Preset};
pub use humanize::{
    format_deadline_display, format_deadline_display_in_tz, format_deadline_verbose,
    format_deadline_verbose_in_tz,
};
pub use plural::{PluralForms, DAY_FORMS, HOUR_FORMS};
