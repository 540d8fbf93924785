use crate::domain::model::{CourseCode, ProfileId};
use crate::domain::ports::Fetch;
use crate::utils::error::{Result, WhatsDueError};
use regex::Regex;

/// Marker phrases the course page uses when a code is unknown, matched
/// case-sensitively as they appear in the source.
const INVALID_CODE_MARKERS: &[&str] =
    &["is not a valid course code", "Unable to find course code"];

/// Resolves a course code to its latest profile id by fetching the course
/// description page and scanning the raw body.
pub async fn resolve<F: Fetch>(fetcher: &F, endpoint: &str, code: &CourseCode) -> Result<ProfileId> {
    let url = format!("{endpoint}{code}");
    tracing::debug!(course = %code, %url, "resolving course profile");
    let body = fetcher.get_text(&url).await?;
    extract_profile_id(code, &body)
}

/// Scans a course page body for the first `profileId=<digits>` occurrence,
/// which always points at the latest profile for the course. A miss is
/// classified by the page's own wording: a known "invalid course" phrase
/// means the code does not exist, anything else means the course exists but
/// has no profile. The two cases carry different user-facing messages.
pub fn extract_profile_id(code: &CourseCode, body: &str) -> Result<ProfileId> {
    let pattern = Regex::new(r"profileId=(\d+)").unwrap();
    if let Some(captures) = pattern.captures(body) {
        let id = ProfileId::new(&captures[1]);
        tracing::debug!(course = %code, profile = %id, "profile id found");
        return Ok(id);
    }

    if INVALID_CODE_MARKERS.iter().any(|m| body.contains(m)) {
        Err(WhatsDueError::InvalidCourseCode {
            code: code.to_string(),
        })
    } else {
        Err(WhatsDueError::NoProfilesAvailable {
            code: code.to_string(),
        })
    }
}
