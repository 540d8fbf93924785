use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhatsDueError {
    #[error("There was an error getting {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{code} is not an 8-character course code.")]
    MalformedCourseCode { code: String },

    #[error("{code} is not a valid course code.")]
    InvalidCourseCode { code: String },

    #[error("{code} has no available course profiles.")]
    NoProfilesAvailable { code: String },

    #[error("There was an error parsing the assessment: no assessment table found.")]
    MalformedReport,

    #[error("There was an error parsing the assessment: row {row} has an empty {field}.")]
    MalformedRow { row: usize, field: &'static str },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, WhatsDueError>;
