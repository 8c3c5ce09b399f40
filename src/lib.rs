//! Planner Patcher: hotfix tool for the meal-planner front-end
//!
//! Applies two hardcoded literal find-and-replace patches to `app_new.js`:
//! restoring the week-navigation element visibility in
//! `updateWeekDisplay()`, and stripping the browser-imposed min/max
//! constraints from the `mealDate` input.
//!
//! # Architecture
//!
//! Everything compiles down to a single primitive: an ordered pass of
//! literal substring replacements over the file's contents held as one
//! in-memory string ([`patch::apply_specs`]). The runner
//! ([`patcher::run`]) wraps that pass in read → apply → unconditional
//! write-back; the file is rewritten even when no spec matched.
//!
//! # Behavior
//!
//! - A spec only mutates the content when its search text is an exact
//!   substring of the current (progressively mutated) content
//! - A missing search text is a tolerated no-op, surfaced as a printed
//!   failure line, never an error
//! - I/O failures are fatal and propagate
//! - Write-back is atomic (tempfile + fsync + rename)
//!
//! # Example
//!
//! ```no_run
//! use planner_patcher::fixes::{builtin_fixes, TARGET_FILE};
//! use planner_patcher::patcher;
//! use std::path::Path;
//!
//! let fixes = builtin_fixes();
//! let run = patcher::run(Path::new(TARGET_FILE), &fixes)?;
//! println!("{} of {} fixes applied", run.applied_count(), fixes.len());
//! # Ok::<(), planner_patcher::PatchError>(())
//! ```

pub mod fixes;
pub mod patch;
pub mod patcher;
pub mod report;

// Re-exports
pub use fixes::{builtin_fixes, TARGET_FILE};
pub use patch::{apply_specs, PatchOutcome, PatchSpec, ReplacePolicy};
pub use patcher::{run, PatchError, PatchRun};
