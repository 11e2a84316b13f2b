use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade for a single course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    F,
}

impl Letter {
    /// Converts a rounded course average into a letter grade.
    ///
    /// | Average  | Grade |
    /// |----------|-------|
    /// | > 89     | A     |
    /// | 80 - 89  | B     |
    /// | 70 - 79  | C     |
    /// | 65 - 69  | D     |
    /// | < 65     | F     |
    pub fn from_average(average: i32) -> Self {
        match average {
            a if a > 89 => Letter::A,
            a if a > 79 => Letter::B,
            a if a > 69 => Letter::C,
            a if a > 64 => Letter::D,
            _ => Letter::F,
        }
    }

    /// Weight of this letter in the grade-point average.
    pub fn points(self) -> u32 {
        match self {
            Letter::A => 4,
            Letter::B => 3,
            Letter::C => 2,
            Letter::D => 1,
            Letter::F => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::F => "F",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Whether the student moves on to the next grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Promotion {
    Promoted,
    Retained,
}

impl Promotion {
    /// GPA is the sole criterion: anything strictly above 1.0 is promoted.
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa > 1.0 {
            Promotion::Promoted
        } else {
            Promotion::Retained
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Promotion::Promoted => "Promoted",
            Promotion::Retained => "Retained",
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
