//! Console status rendering.
//!
//! One line per fix, plus a completion line that is printed regardless of
//! individual outcomes. These strings are the tool's only observable
//! output besides the rewritten file, so their wording is fixed.

use colored::Colorize;

use crate::patch::{PatchOutcome, PatchSpec};

/// Render the status line for one spec's outcome.
pub fn status_line(spec: &PatchSpec, outcome: &PatchOutcome) -> String {
    match outcome {
        PatchOutcome::Applied { .. } => {
            format!("{} {} applied: {}", "✅".green(), spec.id, spec.summary)
        }
        PatchOutcome::NotFound {
            replacement_present,
        } => {
            let line = format!("{} {} failed: {}", "❌".red(), spec.id, spec.target_hint);
            if *replacement_present {
                format!("{} {}", line, "(replacement already present)".dimmed())
            } else {
                line
            }
        }
    }
}

/// The final summary line, printed after every run.
pub fn completion_line() -> String {
    "✅ All fixes applied successfully!".green().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::PatchSpec;

    fn spec() -> PatchSpec {
        PatchSpec::new(
            "Fix 1",
            "updateWeekDisplay method updated",
            "Could not find updateWeekDisplay method",
            "old",
            "new",
        )
    }

    #[test]
    fn test_applied_line() {
        let line = status_line(&spec(), &PatchOutcome::Applied { occurrences: 1 });
        assert!(line.contains("Fix 1 applied: updateWeekDisplay method updated"));
        assert!(line.contains("✅"));
    }

    #[test]
    fn test_not_found_line() {
        let line = status_line(
            &spec(),
            &PatchOutcome::NotFound {
                replacement_present: false,
            },
        );
        assert!(line.contains("Fix 1 failed: Could not find updateWeekDisplay method"));
        assert!(line.contains("❌"));
        assert!(!line.contains("replacement already present"));
    }

    #[test]
    fn test_not_found_line_notes_prior_application() {
        let line = status_line(
            &spec(),
            &PatchOutcome::NotFound {
                replacement_present: true,
            },
        );
        assert!(line.contains("Fix 1 failed: Could not find updateWeekDisplay method"));
        assert!(line.contains("replacement already present"));
    }

    #[test]
    fn test_completion_line() {
        assert!(completion_line().contains("All fixes applied successfully!"));
    }
}
