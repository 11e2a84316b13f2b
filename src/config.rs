use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Legend printed at the bottom of every report.
pub const DEFAULT_SCALE: &str = "A = 90 - 100\nB = 80 - 89\nC = 70 - 79\nD = 65 - 69\nF = Below 65";

/// Institution details shared by every report card of an academic year.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "name": "TRUE KNOWLEDGE QUEST MIDDLE SCHOOL",
///   "academic_year": "2016 - 2017"
/// }
/// ```
/// `scale` may be given too; it falls back to [`DEFAULT_SCALE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub name: String,
    pub academic_year: String,
    #[serde(default = "default_scale")]
    pub scale: String,
}

fn default_scale() -> String {
    DEFAULT_SCALE.to_string()
}

impl Default for School {
    fn default() -> Self {
        Self {
            name: "TRUE KNOWLEDGE QUEST MIDDLE SCHOOL".to_string(),
            academic_year: "2016 - 2017".to_string(),
            scale: default_scale(),
        }
    }
}

impl School {
    /// Loads the school from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let school: School = serde_json::from_str(&content)?;
        debug!(path, name = %school.name, "School config loaded");
        Ok(school)
    }

    /// Applies `SCHOOL_NAME` and `ACADEMIC_YEAR` from the environment, when set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("SCHOOL_NAME").ok(),
            std::env::var("ACADEMIC_YEAR").ok(),
        )
    }

    fn with_overrides(mut self, name: Option<String>, academic_year: Option<String>) -> Self {
        if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
            self.name = name;
        }
        if let Some(year) = academic_year.filter(|y| !y.trim().is_empty()) {
            self.academic_year = year;
        }
        self
    }
}
