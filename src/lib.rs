pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpFetcher;
pub use config::CliConfig;
pub use core::aggregator::Aggregator;
pub use domain::model::{Assessment, CourseCode, DueDate, NormalizedDate, ProfileId};
pub use domain::ports::{ConfigProvider, Fetch};
pub use utils::error::{Result, WhatsDueError};
