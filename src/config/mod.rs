use crate::domain::model::CourseCode;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_endpoint, Validate};
use clap::Parser;

/// The course and assessment endpoints used to get profile and assessment
/// info. The pipeline appends a course code to the first and comma-joined
/// profile ids to the second.
pub const DEFAULT_COURSE_ENDPOINT: &str = "https://www.uq.edu.au/study/course.html?course_code=";
pub const DEFAULT_REPORT_ENDPOINT: &str =
    "https://www.courses.uq.edu.au/student_section_report.php?report=assessment&profileIds=";

#[derive(Debug, Clone, Parser)]
#[command(name = "whatsdue")]
#[command(about = "Lists upcoming assessment for one or more UQ courses")]
pub struct CliConfig {
    /// Course codes to look up, e.g. CSSE2310 MATH1051
    #[arg(required = true)]
    pub courses: Vec<CourseCode>,

    #[arg(long, default_value = DEFAULT_COURSE_ENDPOINT)]
    pub course_endpoint: String,

    #[arg(long, default_value = DEFAULT_REPORT_ENDPOINT)]
    pub report_endpoint: String,

    #[arg(long, help = "Print records as JSON instead of text lines")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn course_endpoint(&self) -> &str {
        &self.course_endpoint
    }

    fn report_endpoint(&self) -> &str {
        &self.report_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoint("course_endpoint", &self.course_endpoint)?;
        validate_endpoint("report_endpoint", &self.report_endpoint)?;
        Ok(())
    }
}
