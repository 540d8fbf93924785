pub mod aggregator;
pub mod dates;
pub mod report;
pub mod resolver;

pub use crate::domain::model::{Assessment, CourseCode, DueDate, NormalizedDate, ProfileId};
pub use crate::domain::ports::{ConfigProvider, Fetch};
pub use crate::utils::error::Result;
