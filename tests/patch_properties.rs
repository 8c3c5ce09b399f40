//! Property tests for the pure replacement engine.

use planner_patcher::{apply_specs, builtin_fixes, PatchOutcome, PatchSpec};
use proptest::prelude::*;

fn spec(search: &str, replacement: &str) -> PatchSpec {
    PatchSpec::new("Fix 1", "summary", "hint", search, replacement)
}

proptest! {
    // Uppercase needles can never occur in lowercase content, so every
    // attempt must be a not-found no-op that returns the input verbatim.
    #[test]
    fn absent_search_never_mutates(
        content in "[a-z ]{0,64}",
        search in "[A-Z]{1,8}",
        replacement in "[a-z]{0,8}",
    ) {
        let specs = [spec(&search, &replacement)];
        let (out, outcomes) = apply_specs(&content, &specs);
        prop_assert_eq!(out, content);
        prop_assert!(matches!(outcomes[0], PatchOutcome::NotFound { .. }), "expected NotFound outcome");
    }

    #[test]
    fn applied_counts_occurrences_and_removes_search(
        prefix in "[a-z]{0,16}",
        sep in "[a-z]{1,4}",
        suffix in "[a-z]{0,16}",
        copies in 1usize..4,
    ) {
        // Uppercase payloads cannot collide with the lowercase filler.
        let search = "NEEDLE";
        let replacement = "PATCHED";

        let mut content = prefix.clone();
        for _ in 0..copies {
            content.push_str(search);
            content.push_str(&sep);
        }
        content.push_str(&suffix);

        let specs = [spec(search, replacement)];
        let (out, outcomes) = apply_specs(&content, &specs);

        prop_assert_eq!(outcomes[0], PatchOutcome::Applied { occurrences: copies });
        prop_assert!(!out.contains(search));
        prop_assert_eq!(out.matches(replacement).count(), copies);
    }

    // The built-in fixes can never match short unrelated content; the
    // full pass must hand back the input untouched.
    #[test]
    fn builtin_fixes_round_trip_unrelated_content(content in "[a-z \n]{0,64}") {
        let (out, outcomes) = apply_specs(&content, &builtin_fixes());
        prop_assert_eq!(out, content);
        prop_assert!(outcomes.iter().all(|o| !o.is_applied()));
    }
}
