//! Human-readable presentations of a [`ReportCard`].
//!
//! [`render_text`] builds a sectioned plain-text document; [`write_table`]
//! prints the classic report card layout to any [`Write`] sink.

use std::io::Write;

use anyhow::Result;

use crate::card::{QUARTERS, ReportCard};
use crate::config::School;
use crate::error::ReportCardError;

const DIVIDER: &str = "-----------------------------------------------------------------------";

/// Zero-pads each attendance count to two digits, joined by `separator`.
fn format_counts(counts: &[u32; QUARTERS], separator: &str) -> String {
    counts
        .iter()
        .map(|c| format!("{c:02}"))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Renders the report card as a sectioned plain-text document.
///
/// Sections, in order: school header, student, raw scores, averages and
/// letters, attendance, GPA, promotion decision, academic scale.
///
/// # Errors
///
/// Returns [`ReportCardError::EmptyCourseList`] when the card has no courses.
pub fn render_text(card: &ReportCard, school: &School) -> Result<String, ReportCardError> {
    let gpa = card.grade_point_average()?;
    let decision = ReportCard::promotion_decision(gpa);

    let mut scores = String::from("SCORES:\n-------\n");
    let mut averages = String::from("AVERAGE AND LETTER GRADE:\n-------------------------\n");
    for course in card.course_summaries() {
        let raw = course
            .scores
            .iter()
            .map(|s| format!("{s:?}"))
            .collect::<Vec<_>>()
            .join(" ");
        scores.push_str(&format!("{}: {}\n", course.title, raw));
        averages.push_str(&format!(
            "{}: {} {}\n",
            course.title, course.average, course.letter
        ));
    }

    let attendance = format!(
        "ATTENDANCE:\n-----------\nDays Absent: {}\nTimes Tardy: {}",
        format_counts(card.days_absent(), " "),
        format_counts(card.times_tardy(), " "),
    );

    Ok(format!(
        "{}\n{}\nName: {}\nGrade: {}\n\n{}\n\n{}\n\n{}\n\nGPA: {:.2}\n\nPromoted or Retained: {}\n\n\nACADEMIC SCALE\n--------------\n{}",
        school.name,
        school.academic_year,
        card.name(),
        card.grade_level(),
        scores,
        averages,
        attendance,
        gpa,
        decision.as_str().to_uppercase(),
        school.scale,
    ))
}

/// Writes the report card as a fixed-width table to `out`.
///
/// Nothing is written when the card has no courses.
pub fn write_table<W: Write>(card: &ReportCard, school: &School, out: &mut W) -> Result<()> {
    let gpa = card.grade_point_average()?;
    let decision = ReportCard::promotion_decision(gpa);

    writeln!(out, "{:>55}", school.name)?;
    writeln!(out, "{:>42}", school.academic_year)?;
    writeln!(out, "Student: {}", card.name())?;
    writeln!(out, "  Grade: {}\n\n", card.grade_level())?;

    writeln!(
        out,
        "{:>20}{:>6}{:>7}{:>7}{:>7}{:>10}{:>14}",
        "Subject", "1Q", "2Q", "3Q", "4Q", "Average", "Letter Grade"
    )?;
    writeln!(out, "{DIVIDER}")?;
    for course in card.course_summaries() {
        write!(out, "{:>20}:", course.title)?;
        for score in course.scores {
            write!(out, " {score:6.2}")?;
        }
        writeln!(out, "{:6}{:>10}", course.average, course.letter)?;
    }
    writeln!(out, "{DIVIDER}\n")?;

    writeln!(out, "ATTENDANCE")?;
    writeln!(out, "Days Absent:\t{}", format_counts(card.days_absent(), "\t"))?;
    writeln!(out, "Times Tardy:\t{}\n", format_counts(card.times_tardy(), "\t"))?;

    writeln!(out, "GPA: {gpa:.2}\n")?;
    writeln!(
        out,
        "Promoted or Retained: {}\n\n",
        decision.as_str().to_uppercase()
    )?;
    writeln!(out, "{}", school.scale)?;

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReportCard {
        ReportCard::new(
            "Robert",
            "7",
            vec!["Science".into(), "History".into()],
            vec![vec![95.75, 100.0, 98.85, 99.5], vec![60.0, 62.0, 61.0, 63.0]],
            [0, 3, 0, 12],
            [0, 1, 0, 0],
        )
        .unwrap()
    }

    fn table(card: &ReportCard) -> String {
        let mut buf = Vec::new();
        write_table(card, &School::default(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_counts() {
        assert_eq!(format_counts(&[0, 3, 0, 12], " "), "00 03 00 12");
        assert_eq!(format_counts(&[100, 1, 0, 9], "\t"), "100\t01\t00\t09");
    }

    #[test]
    fn test_text_sections_in_order() {
        let text = render_text(&sample(), &School::default()).unwrap();
        let headings = [
            "TRUE KNOWLEDGE QUEST MIDDLE SCHOOL",
            "Name: Robert",
            "SCORES:",
            "AVERAGE AND LETTER GRADE:",
            "ATTENDANCE:",
            "GPA:",
            "Promoted or Retained:",
            "ACADEMIC SCALE",
        ];
        let positions: Vec<usize> = headings.iter().map(|h| text.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_text_course_lines() {
        let text = render_text(&sample(), &School::default()).unwrap();
        assert!(text.contains("Science: 95.75 100.0 98.85 99.5\n"));
        assert!(text.contains("Science: 99 A\n"));
        assert!(text.contains("History: 62 F\n"));
        assert!(text.contains("Days Absent: 00 03 00 12\n"));
        assert!(text.contains("Times Tardy: 00 01 00 00"));
        // A + F over two courses
        assert!(text.contains("GPA: 2.00"));
        assert!(text.contains("Promoted or Retained: PROMOTED"));
    }

    #[test]
    fn test_text_uses_injected_school() {
        let school = School {
            name: "OAK HILL".into(),
            academic_year: "2024 - 2025".into(),
            scale: "A = 90+".into(),
        };
        let text = render_text(&sample(), &school).unwrap();
        assert!(text.starts_with("OAK HILL\n2024 - 2025\n"));
        assert!(text.ends_with("ACADEMIC SCALE\n--------------\nA = 90+"));
    }

    #[test]
    fn test_text_empty_course_list() {
        let card = ReportCard::new("Robert", "7", vec![], vec![], [0; 4], [0; 4]).unwrap();
        assert_eq!(
            render_text(&card, &School::default()),
            Err(ReportCardError::EmptyCourseList)
        );
    }

    #[test]
    fn test_table_rows() {
        let out = table(&sample());
        assert!(out.contains("             Science:  95.75 100.00  98.85  99.50    99         A\n"));
        assert!(out.contains("             History:  60.00  62.00  61.00  63.00    62         F\n"));
        assert_eq!(out.matches(DIVIDER).count(), 2);
    }

    #[test]
    fn test_table_header_and_footer() {
        let out = table(&sample());
        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            format!("{:>55}", "TRUE KNOWLEDGE QUEST MIDDLE SCHOOL")
        );
        assert_eq!(lines.next().unwrap(), format!("{:>42}", "2016 - 2017"));
        assert_eq!(lines.next().unwrap(), "Student: Robert");
        assert_eq!(lines.next().unwrap(), "  Grade: 7");
        assert!(out.contains(
            "             Subject    1Q     2Q     3Q     4Q   Average  Letter Grade\n"
        ));
        assert!(out.contains("Days Absent:\t00\t03\t00\t12\n"));
        assert!(out.contains("Times Tardy:\t00\t01\t00\t00\n"));
        assert!(out.contains("GPA: 2.00\n"));
        assert!(out.contains("Promoted or Retained: PROMOTED\n"));
        assert!(out.trim_end().ends_with("F = Below 65"));
    }

    #[test]
    fn test_table_empty_course_list_writes_nothing() {
        let card = ReportCard::new("Robert", "7", vec![], vec![], [0; 4], [0; 4]).unwrap();
        let mut buf = Vec::new();
        assert!(write_table(&card, &School::default(), &mut buf).is_err());
        assert!(buf.is_empty());
    }
}
