//! Machine-readable exports of a report card.
//!
//! Supports a JSON summary and CSV append of one row per course.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::{debug, info};

use crate::card::{CourseSummary, QUARTERS, ReportCard};
use crate::config::School;
use crate::grading::{Letter, Promotion};

/// One course line, flattened for CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    pub student: String,
    pub course: String,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
    pub average: i32,
    pub letter: Letter,
}

impl CourseRecord {
    fn new(student: &str, course: &CourseSummary<'_>) -> Self {
        let [q1, q2, q3, q4] = course.scores;
        Self {
            student: student.to_string(),
            course: course.title.to_string(),
            q1,
            q2,
            q3,
            q4,
            average: course.average,
            letter: course.letter,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Attendance {
    pub days_absent: [u32; QUARTERS],
    pub times_tardy: [u32; QUARTERS],
}

/// Snapshot of everything a report card shows, serialized as JSON.
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub school: String,
    pub academic_year: String,
    pub student: String,
    pub grade_level: String,
    pub courses: Vec<CourseRecord>,
    pub attendance: Attendance,
    pub gpa: f64,
    pub decision: Promotion,
}

impl ReportSummary {
    pub fn from_card(card: &ReportCard, school: &School) -> Result<Self> {
        let gpa = card.grade_point_average()?;
        Ok(Self {
            generated_at: Utc::now(),
            school: school.name.clone(),
            academic_year: school.academic_year.clone(),
            student: card.name().to_string(),
            grade_level: card.grade_level().to_string(),
            courses: card
                .course_summaries()
                .map(|c| CourseRecord::new(card.name(), &c))
                .collect(),
            attendance: Attendance {
                days_absent: *card.days_absent(),
                times_tardy: *card.times_tardy(),
            },
            gpa,
            decision: ReportCard::promotion_decision(gpa),
        })
    }
}

/// Serializes the report card summary as pretty-printed JSON.
pub fn to_json(card: &ReportCard, school: &School) -> Result<String> {
    let summary = ReportSummary::from_card(card, school)?;
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Appends one CSV row per course of `card` to the file at `path`.
///
/// Creates the file with headers if it does not already exist.
#[tracing::instrument(skip(card), fields(student = %card.name()))]
pub fn append_records(path: &str, card: &ReportCard) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    let mut rows = 0;
    for course in card.course_summaries() {
        writer.serialize(CourseRecord::new(card.name(), &course))?;
        rows += 1;
    }
    writer.flush()?;

    info!(rows, "Course records written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample() -> ReportCard {
        ReportCard::new(
            "Robert",
            "7",
            vec!["Science".into(), "Art".into()],
            vec![vec![95.75, 100.0, 98.85, 99.5], vec![85.0; 4]],
            [0, 0, 0, 0],
            [0, 1, 0, 0],
        )
        .unwrap()
    }

    #[test]
    fn test_to_json_fields() {
        let json = to_json(&sample(), &School::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["student"], "Robert");
        assert_eq!(value["gpa"], 3.5);
        assert_eq!(value["decision"], "Promoted");
        assert_eq!(value["courses"][0]["course"], "Science");
        assert_eq!(value["courses"][0]["average"], 99);
        assert_eq!(value["courses"][1]["letter"], "B");
        assert_eq!(value["attendance"]["times_tardy"][1], 1);
    }

    #[test]
    fn test_to_json_empty_course_list() {
        let card = ReportCard::new("Robert", "7", vec![], vec![], [0; 4], [0; 4]).unwrap();
        assert!(to_json(&card, &School::default()).is_err());
    }

    #[test]
    fn test_append_records_writes_header_once() {
        let path = temp_path("report_card_test_header.csv");
        let _ = fs::remove_file(&path);

        append_records(&path, &sample()).unwrap();
        append_records(&path, &sample()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        // 1 header + 2 courses written twice
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "student,course,q1,q2,q3,q4,average,letter");
        assert_eq!(lines[1], "Robert,Science,95.75,100.0,98.85,99.5,99,A");
        assert_eq!(lines[2], "Robert,Art,85.0,85.0,85.0,85.0,85,B");

        fs::remove_file(&path).unwrap();
    }
}
