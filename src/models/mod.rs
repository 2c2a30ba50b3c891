pub mod config;
pub mod report;

pub use config::{AppConfig, ConfigSource, InspectConfig, RemoveBgConfig, RemoveBgOverrides};
pub use report::{InspectionReport, SamplePoint};
