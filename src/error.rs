//! Errors raised while building or querying a [`ReportCard`](crate::card::ReportCard).

/// Everything that can go wrong in the core computation pipeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ReportCardError {
    /// The student's name contains something other than letters and whitespace.
    #[error("Illegal value for student's name: `{0}`")]
    InvalidName(String),
    /// A course was given a number of scores other than one per quarter.
    #[error("Course `{course}` has {found} scores, expected one for each of the 4 quarters")]
    InvalidScoreCount { course: String, found: usize },
    /// A score was negative, NaN or infinite.
    #[error("Course `{course}` has an invalid score: {value}")]
    InvalidScoreValue { course: String, value: f64 },
    /// The course list and the score lists are not parallel.
    #[error("Got {courses} courses but {scores} score lists")]
    CourseCountMismatch { courses: usize, scores: usize },
    /// No enrolled course has this title.
    #[error("No course titled `{0}` on this report card")]
    CourseNotFound(String),
    /// A grade-point average was requested for a card without courses.
    #[error("Cannot compute a GPA without any enrolled courses")]
    EmptyCourseList,
}
