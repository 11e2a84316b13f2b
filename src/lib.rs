pub mod card;
pub mod config;
pub mod error;
pub mod grading;
pub mod output;
pub mod render;

pub use card::{ReportCard, ReportCardInput};
pub use config::School;
pub use error::ReportCardError;
