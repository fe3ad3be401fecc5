//! Report types and their text/JSON rendering

use std::cmp::Ordering;

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use veritas::{Bounds, Version, VersionRequirement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where a version falls relative to a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Below,
    Within,
    Above,
}

impl From<Ordering> for Position {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Position::Below,
            Ordering::Equal => Position::Within,
            Ordering::Greater => Position::Above,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub version: String,
    pub satisfied: bool,
    pub position: Position,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub requirement: String,
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    pub fn new(requirement: &VersionRequirement, versions: &[Version]) -> Self {
        let results = versions
            .iter()
            .map(|version| {
                let position = Position::from(requirement.compare(version));
                CheckResult {
                    version: version.to_string(),
                    satisfied: position == Position::Within,
                    position,
                }
            })
            .collect();

        CheckReport {
            requirement: requirement.to_string(),
            results,
        }
    }

    pub fn all_satisfied(&self) -> bool {
        self.results.iter().all(|r| r.satisfied)
    }

    pub fn render_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.results.len());
        for result in &self.results {
            let line = match result.position {
                Position::Within => format!(
                    "{} {} satisfies {}",
                    "✓".green(),
                    result.version,
                    self.requirement
                ),
                Position::Below => format!(
                    "{} {} is below {}",
                    "✗".red(),
                    result.version,
                    self.requirement
                ),
                Position::Above => format!(
                    "{} {} is above {}",
                    "✗".red(),
                    result.version,
                    self.requirement
                ),
            };
            lines.push(line);
        }
        lines.join("\n")
    }
}

#[derive(Debug, Serialize)]
pub struct RangeEntry {
    pub spec: String,
    pub min: String,
    pub max: Option<String>,
}

impl RangeEntry {
    fn new(spec: String, bounds: &Bounds) -> Self {
        RangeEntry {
            spec,
            min: bounds.min().to_string(),
            max: bounds.max().map(Version::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RangeReport {
    #[serde(flatten)]
    pub combined: RangeEntry,
    pub specs: Vec<RangeEntry>,
}

impl RangeReport {
    pub fn new(requirement: &VersionRequirement) -> Self {
        RangeReport {
            combined: RangeEntry::new(requirement.to_string(), requirement.constraints()),
            specs: requirement
                .specs()
                .iter()
                .map(|spec| RangeEntry::new(spec.to_string(), spec.bounds()))
                .collect(),
        }
    }

    pub fn render_text(&self) -> String {
        let width = self.specs.iter().map(|s| s.spec.len()).max().unwrap_or(0);

        let mut lines = vec![format!(
            "{} {}",
            self.combined.spec.bold(),
            format_range(&self.combined).cyan()
        )];
        for entry in &self.specs {
            lines.push(format!("  {:<width$}  {}", entry.spec, format_range(entry), width = width));
        }
        lines.join("\n")
    }
}

fn format_range(entry: &RangeEntry) -> String {
    match &entry.max {
        Some(max) => format!(">={}, <{}", entry.min, max),
        None => format!(">={}", entry.min),
    }
}

/// Render a list of versions, one per line, or as a JSON array
pub fn render_versions(versions: &[Version], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(versions
            .iter()
            .map(Version::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let rendered: Vec<String> = versions.iter().map(Version::to_string).collect();
            serde_json::to_string_pretty(&rendered)
        }
    }
}
