use crate::core::dates;
use crate::utils::error::{Result, WhatsDueError};
use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An institution-assigned course identifier, e.g. `CSSE2310`.
///
/// Always 8 ASCII alphanumeric characters, stored uppercase. The form layer
/// upstream enforces the length too, but the core rejects malformed codes
/// itself rather than trusting that validation ran.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CourseCode(String);

impl CourseCode {
    pub fn parse(raw: &str) -> Result<Self> {
        let code = raw.trim().to_uppercase();
        if code.len() != 8 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(WhatsDueError::MalformedCourseCode {
                code: raw.trim().to_string(),
            });
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CourseCode {
    type Err = WhatsDueError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Institution-internal id of one assessment profile. Intermediate value
/// only: produced by one resolution call, consumed when the combined report
/// URL is built, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A due date as normalized from the raw table text. `Invalid` is a data
/// value rendered to the user, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum DueDate {
    Known(NormalizedDate),
    Invalid,
}

impl DueDate {
    pub fn is_known(&self) -> bool {
        matches!(self, DueDate::Known(_))
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueDate::Known(date) => date.fmt(f),
            DueDate::Invalid => f.write_str("invalid date"),
        }
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Canonical calendar value, anchored to Brisbane time (UTC+10, no DST).
///
/// Renders as `%Y-%m-%d %I:%M:%S`: the hour is 12-hour with no meridiem
/// indicator, matching the format this output has always used. Midnight and
/// noon are therefore indistinguishable in the rendered string even though
/// the underlying instant is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedDate(DateTime<FixedOffset>);

impl NormalizedDate {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Whether the deadline has already passed at `now`.
    pub fn is_past(&self, now: DateTime<FixedOffset>) -> bool {
        now > self.0
    }
}

impl fmt::Display for NormalizedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %I:%M:%S"))
    }
}

/// One row of the assessment table: a single task's due-date and weighting
/// data for a single course. Immutable once built; the normalized due date
/// is derived from the raw text at construction.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub subject: String,
    pub task: String,
    pub due_date_raw: String,
    pub weighting: String,
    pub due_date: DueDate,
}

impl Assessment {
    pub fn new(subject: String, task: String, due_date_raw: String, weighting: String) -> Self {
        let due_date = dates::normalize(&due_date_raw);
        Self {
            subject,
            task,
            due_date_raw,
            weighting,
            due_date,
        }
    }

    /// Whether this task's deadline is known and already behind `now`.
    pub fn is_past(&self, now: DateTime<FixedOffset>) -> bool {
        match &self.due_date {
            DueDate::Known(date) => date.is_past(now),
            DueDate::Invalid => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_code_uppercases_and_trims() {
        let code = CourseCode::parse("  csse2310 ").unwrap();
        assert_eq!(code.as_str(), "CSSE2310");
    }

    #[test]
    fn course_code_rejects_wrong_length() {
        assert!(matches!(
            CourseCode::parse("CSSE231"),
            Err(WhatsDueError::MalformedCourseCode { .. })
        ));
        assert!(matches!(
            CourseCode::parse(""),
            Err(WhatsDueError::MalformedCourseCode { .. })
        ));
    }

    #[test]
    fn course_code_rejects_non_alphanumeric() {
        assert!(matches!(
            CourseCode::parse("CSSE23!0"),
            Err(WhatsDueError::MalformedCourseCode { .. })
        ));
    }

    #[test]
    fn invalid_due_date_displays_marker() {
        assert_eq!(DueDate::Invalid.to_string(), "invalid date");
    }

    #[test]
    fn assessment_normalizes_due_date_on_construction() {
        let assessment = Assessment::new(
            "CSSE2310".to_string(),
            "Assignment 1".to_string(),
            "29 Aug 2025: 17:00".to_string(),
            "20%".to_string(),
        );
        assert!(assessment.due_date.is_known());
        assert_eq!(assessment.due_date.to_string(), "2025-08-29 05:00:00");
    }
}
