//! The report card itself.
//!
//! A [`ReportCard`] is a final record: it is validated once on construction
//! and has no setters. Everything else (averages, letters, GPA, promotion)
//! is derived on demand from the stored scores.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ReportCardError;
use crate::grading::utility::{mean, round_to_int};
use crate::grading::{Letter, Promotion};

/// Number of grading periods in an academic year.
pub const QUARTERS: usize = 4;

/// Raw report card payload as handed over by the student records system.
///
/// ```json
/// {
///   "name": "Robert",
///   "grade_level": "7",
///   "courses": ["Science"],
///   "scores": [[95.75, 100.0, 98.85, 99.5]],
///   "days_absent": [0, 0, 0, 0],
///   "times_tardy": [0, 1, 0, 0]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportCardInput {
    pub name: String,
    pub grade_level: String,
    pub courses: Vec<String>,
    pub scores: Vec<Vec<f64>>,
    pub days_absent: [u32; QUARTERS],
    pub times_tardy: [u32; QUARTERS],
}

impl ReportCardInput {
    /// Loads a payload from a JSON file at `path`.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// A validated, immutable report card for one student and one academic year.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCard {
    name: String,
    grade_level: String,
    courses: Vec<String>,
    scores: Vec<[f64; QUARTERS]>,
    days_absent: [u32; QUARTERS],
    times_tardy: [u32; QUARTERS],
}

/// One course line of the report: its raw scores and what they grade to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseSummary<'a> {
    pub title: &'a str,
    pub scores: [f64; QUARTERS],
    pub average: i32,
    pub letter: Letter,
}

impl ReportCard {
    /// Validates the inputs and builds the card.
    ///
    /// # Errors
    ///
    /// Fails when the name is not purely alphabetic, when `courses` and
    /// `scores` differ in length, or when any course does not carry exactly
    /// four finite, non-negative scores. The first problem found is returned
    /// and no card is built.
    pub fn new(
        name: impl Into<String>,
        grade_level: impl Into<String>,
        courses: Vec<String>,
        scores: Vec<Vec<f64>>,
        days_absent: [u32; QUARTERS],
        times_tardy: [u32; QUARTERS],
    ) -> Result<Self, ReportCardError> {
        let name = name.into();
        if !contains_only_alphabets(&name) {
            warn!(name = %name, "Rejected report card: illegal student name");
            return Err(ReportCardError::InvalidName(name));
        }

        if courses.len() != scores.len() {
            warn!(
                courses = courses.len(),
                scores = scores.len(),
                "Rejected report card: courses and scores are not parallel"
            );
            return Err(ReportCardError::CourseCountMismatch {
                courses: courses.len(),
                scores: scores.len(),
            });
        }

        let scores = courses
            .iter()
            .zip(scores)
            .map(|(course, list)| quarterly_scores(course, list))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(name = %name, courses = courses.len(), "Report card created");

        Ok(Self {
            name,
            grade_level: grade_level.into(),
            courses,
            scores,
            days_absent,
            times_tardy,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade_level(&self) -> &str {
        &self.grade_level
    }

    /// Enrolled course titles, in report order.
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Quarterly scores, parallel to [`courses`](Self::courses).
    pub fn scores(&self) -> &[[f64; QUARTERS]] {
        &self.scores
    }

    pub fn days_absent(&self) -> &[u32; QUARTERS] {
        &self.days_absent
    }

    pub fn times_tardy(&self) -> &[u32; QUARTERS] {
        &self.times_tardy
    }

    /// Days absent formatted as `[0, 0, 0, 0]`.
    pub fn days_absent_display(&self) -> String {
        format!("{:?}", self.days_absent)
    }

    /// Times tardy formatted as `[0, 1, 0, 0]`.
    pub fn times_tardy_display(&self) -> String {
        format!("{:?}", self.times_tardy)
    }

    /// Returns the four quarterly scores of the first course titled `course_title`.
    pub fn mapped_scores(&self, course_title: &str) -> Result<[f64; QUARTERS], ReportCardError> {
        self.courses
            .iter()
            .position(|c| c == course_title)
            .map(|i| self.scores[i])
            .ok_or_else(|| ReportCardError::CourseNotFound(course_title.to_string()))
    }

    /// Mean of the quarterly scores, rounded to the nearest whole number (ties up).
    pub fn course_average(scores: &[f64; QUARTERS]) -> i32 {
        round_to_int(mean(scores))
    }

    pub fn letter_grade(&self, course_title: &str) -> Result<Letter, ReportCardError> {
        let scores = self.mapped_scores(course_title)?;
        Ok(Letter::from_average(Self::course_average(&scores)))
    }

    /// Mean letter weight across all courses (A = 4, B = 3, C = 2, D = 1, F = 0).
    ///
    /// # Errors
    ///
    /// Returns [`ReportCardError::EmptyCourseList`] when no courses are enrolled.
    pub fn grade_point_average(&self) -> Result<f64, ReportCardError> {
        if self.courses.is_empty() {
            return Err(ReportCardError::EmptyCourseList);
        }
        let total: u32 = self
            .scores
            .iter()
            .map(|s| Letter::from_average(Self::course_average(s)).points())
            .sum();
        Ok(total as f64 / self.courses.len() as f64)
    }

    pub fn promotion_decision(gpa: f64) -> Promotion {
        Promotion::from_gpa(gpa)
    }

    /// Per-course summaries in report order.
    pub fn course_summaries(&self) -> impl Iterator<Item = CourseSummary<'_>> {
        self.courses.iter().zip(&self.scores).map(|(title, scores)| {
            let average = Self::course_average(scores);
            CourseSummary {
                title,
                scores: *scores,
                average,
                letter: Letter::from_average(average),
            }
        })
    }
}

impl TryFrom<ReportCardInput> for ReportCard {
    type Error = ReportCardError;

    fn try_from(input: ReportCardInput) -> Result<Self, Self::Error> {
        ReportCard::new(
            input.name,
            input.grade_level,
            input.courses,
            input.scores,
            input.days_absent,
            input.times_tardy,
        )
    }
}

/// True when `s` has at least one letter and nothing but letters once whitespace is removed.
fn contains_only_alphabets(s: &str) -> bool {
    let mut letters = s.chars().filter(|c| !c.is_whitespace()).peekable();
    letters.peek().is_some() && letters.all(char::is_alphabetic)
}

fn quarterly_scores(course: &str, list: Vec<f64>) -> Result<[f64; QUARTERS], ReportCardError> {
    let found = list.len();
    let scores: [f64; QUARTERS] = list.try_into().map_err(|_| {
        warn!(course, found, "Rejected report card: wrong number of quarterly scores");
        ReportCardError::InvalidScoreCount {
            course: course.to_string(),
            found,
        }
    })?;

    if let Some(&value) = scores.iter().find(|v| !v.is_finite() || **v < 0.0) {
        warn!(course, value, "Rejected report card: invalid score");
        return Err(ReportCardError::InvalidScoreValue {
            course: course.to_string(),
            value,
        });
    }

    Ok(scores)
}
