use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;
use serde::{Deserialize, Serialize};

/// How serious a validation finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Style or completeness hint
    Advisory,
    /// Likely mistake, the data stays usable
    Moderate,
    /// Violates the format; downstream tools may misread the data
    Critical,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Self::Advisory => "ADVISORY",
            Self::Moderate => "MODERATE",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Individual validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Seriousness of the finding
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

impl ValidationWarning {
    pub(crate) fn advisory(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Advisory,
            message: message.into(),
        }
    }

    pub(crate) fn moderate(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Moderate,
            message: message.into(),
        }
    }

    pub(crate) fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            message: message.into(),
        }
    }
}

/// Validation findings for one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Findings in the order they were raised
    pub warnings: Vec<ValidationWarning>,
    /// Path of the file that was validated
    pub file_path: String,
}

impl ValidationReport {
    /// Create a new validation report for the given file path
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            warnings: Vec::new(),
            file_path: file_path.into(),
        }
    }

    /// Add a finding to the report
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Append the findings of another report, prefixed with its file path
    pub fn merge(&mut self, other: ValidationReport) {
        let prefix = other.file_path;
        self.warnings
            .extend(other.warnings.into_iter().map(|mut warning| {
                if !prefix.is_empty() {
                    warning.message = format!("{prefix}: {}", warning.message);
                }
                warning
            }));
    }

    /// No findings at all
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Check if any finding is critical
    pub fn has_critical(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.severity == Severity::Critical)
    }

    /// Count the findings of one severity
    pub fn count(&self, severity: Severity) -> usize {
        self.warnings
            .iter()
            .filter(|w| w.severity == severity)
            .count()
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::Emoji;

            static OK: Emoji<'_, '_> = Emoji("✓", "[OK]");
            static INFO: Emoji<'_, '_> = Emoji("ℹ", "[INFO]");
            static WARN: Emoji<'_, '_> = Emoji("⚠", "[WARN]");
            static FAIL: Emoji<'_, '_> = Emoji("✗", "[FAIL]");

            let mut output = String::new();

            output.push_str(&format!("{}\n", style("ISA-Tab Validation Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("=========================").cyan()));
            output.push_str(&format!("{}: {}\n\n", style("File").bold(), self.file_path));

            for warning in &self.warnings {
                let line = match warning.severity {
                    Severity::Advisory => format!(
                        "[{}] {}: {}\n",
                        INFO,
                        style("ADVISORY").cyan().bold(),
                        warning.message
                    ),
                    Severity::Moderate => format!(
                        "[{}] {}: {}\n",
                        WARN,
                        style("MODERATE").yellow().bold(),
                        warning.message
                    ),
                    Severity::Critical => format!(
                        "[{}] {}: {}\n",
                        FAIL,
                        style("CRITICAL").red().bold(),
                        warning.message
                    ),
                };
                output.push_str(&line);
            }

            output.push('\n');
            output.push_str(&format!(
                "{}: {} advisory, {} moderate, {} critical\n",
                style("Summary").bold(),
                style(self.count(Severity::Advisory)).cyan(),
                style(self.count(Severity::Moderate)).yellow(),
                style(self.count(Severity::Critical)).red()
            ));

            output.push('\n');
            if self.has_critical() {
                output.push_str(&format!("{}\n", style("Validation FAILED").red().bold()));
            } else if !self.is_clean() {
                output.push_str(&format!(
                    "{}\n",
                    style("Validation PASSED with warnings").yellow().bold()
                ));
            } else {
                output.push_str(&format!("[{}] {}\n", OK, style("Validation PASSED").green().bold()));
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ISA-Tab Validation Report")?;
        writeln!(f, "=========================")?;
        writeln!(f, "File: {}", self.file_path)?;
        writeln!(f)?;

        for warning in &self.warnings {
            let symbol = match warning.severity {
                Severity::Advisory => "ℹ",
                Severity::Moderate => "⚠",
                Severity::Critical => "✗",
            };
            writeln!(f, "[{}] {}: {}", symbol, warning.severity, warning.message)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} advisory, {} moderate, {} critical",
            self.count(Severity::Advisory),
            self.count(Severity::Moderate),
            self.count(Severity::Critical)
        )?;

        writeln!(f)?;
        if self.has_critical() {
            writeln!(f, "Validation FAILED")?;
        } else if !self.is_clean() {
            writeln!(f, "Validation PASSED with warnings")?;
        } else {
            writeln!(f, "Validation PASSED")?;
        }

        Ok(())
    }
}
