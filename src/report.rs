//! Ranked benchmark report

use serde::Serialize;

/// One engine's measured elapsed time in seconds.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub engine: String,
    pub seconds: f64,
}

/// Engines ranked ascending by elapsed time.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn ranked(mut entries: Vec<ReportEntry>) -> Self {
        entries.sort_by(|a, b| a.seconds.total_cmp(&b.seconds));
        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn fastest(&self) -> Option<&ReportEntry> {
        self.entries.first()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}

impl std::fmt::Display for Report {
    /// Dictionary-literal form, e.g. `{"minijinja": 0.012, "tera": 0.019}`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "\"{}\": {}", entry.engine, entry.seconds)?;
        }
        write!(f, "}}")
    }
}
