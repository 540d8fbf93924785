use crate::utils::error::{Result, WhatsDueError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_endpoint(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(WhatsDueError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(WhatsDueError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(WhatsDueError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_endpoint() {
        assert!(validate_endpoint("course_endpoint", "https://example.edu/course?code=").is_ok());
    }

    #[test]
    fn rejects_empty_endpoint() {
        assert!(matches!(
            validate_endpoint("course_endpoint", ""),
            Err(WhatsDueError::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(matches!(
            validate_endpoint("report_endpoint", "ftp://example.edu/report"),
            Err(WhatsDueError::InvalidConfigValue { .. })
        ));
    }
}
