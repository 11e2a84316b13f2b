//! Course averaging and letter grading.
//!
//! Averages are rounded to whole numbers before being mapped onto the
//! academic scale, and letters are weighted into a grade-point average.

pub mod grade;
pub mod utility;

pub use grade::{Letter, Promotion};
