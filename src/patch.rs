//! Patch specs and the pure application engine.
//!
//! All file-level behavior compiles down to a single primitive: an ordered
//! pass of literal substring replacements over one in-memory string. The
//! engine never touches the filesystem, so every invariant is testable on
//! plain strings.

/// How many occurrences of the search text a spec replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplacePolicy {
    /// Replace every occurrence of the search text.
    #[default]
    All,
    /// Replace only the leftmost occurrence.
    First,
}

/// A single literal before/after replacement, plus the labels used when
/// reporting its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSpec {
    /// Short identifier shown on every status line (e.g. "Fix 1").
    pub id: String,
    /// What the fix accomplished, for the success line.
    pub summary: String,
    /// What could not be located, for the failure line.
    pub target_hint: String,
    /// Exact text that must be present for the spec to apply.
    pub search: String,
    /// Text substituted for each replaced occurrence.
    pub replacement: String,
    /// Occurrence policy for this spec.
    pub policy: ReplacePolicy,
}

impl PatchSpec {
    pub fn new(
        id: impl Into<String>,
        summary: impl Into<String>,
        target_hint: impl Into<String>,
        search: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            target_hint: target_hint.into(),
            search: search.into(),
            replacement: replacement.into(),
            policy: ReplacePolicy::All,
        }
    }

    pub fn with_policy(mut self, policy: ReplacePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Result of attempting one spec against the current content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "PatchOutcome should be checked for success/failure"]
pub enum PatchOutcome {
    /// Search text was found; `occurrences` replacements were made.
    Applied { occurrences: usize },
    /// Search text was absent; the content is untouched for this spec.
    /// `replacement_present` is true when the replacement text already
    /// exists in the content, the expected state after an earlier run.
    NotFound { replacement_present: bool },
}

impl PatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, PatchOutcome::Applied { .. })
    }
}

/// Apply an ordered sequence of specs to `content`.
///
/// Specs are checked against the progressively mutated content, so order
/// matters: an earlier replacement can create or destroy a later spec's
/// match. Returns the final content and one outcome per spec, in spec
/// order. A spec whose search text is absent leaves the content unchanged
/// and is reported as [`PatchOutcome::NotFound`], never as an error.
pub fn apply_specs(content: &str, specs: &[PatchSpec]) -> (String, Vec<PatchOutcome>) {
    let mut current = content.to_string();
    let mut outcomes = Vec::with_capacity(specs.len());

    for spec in specs {
        outcomes.push(apply_one(&mut current, spec));
    }

    (current, outcomes)
}

fn apply_one(current: &mut String, spec: &PatchSpec) -> PatchOutcome {
    // An empty needle matches at every position; refuse it instead of
    // letting `str::replace` interleave the replacement everywhere.
    if spec.search.is_empty() || !current.contains(&spec.search) {
        return PatchOutcome::NotFound {
            replacement_present: !spec.replacement.is_empty()
                && current.contains(&spec.replacement),
        };
    }

    let occurrences = match spec.policy {
        ReplacePolicy::All => {
            let count = current.matches(&spec.search).count();
            *current = current.replace(&spec.search, &spec.replacement);
            count
        }
        ReplacePolicy::First => {
            *current = current.replacen(&spec.search, &spec.replacement, 1);
            1
        }
    };

    PatchOutcome::Applied { occurrences }
}
