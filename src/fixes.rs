//! The built-in fix set for the planner front-end.
//!
//! Both fixes target `app_new.js` and are compiled in: there is no config
//! surface, and the search/replacement payloads must stay byte-exact —
//! including the space-only separator lines inside the first replacement —
//! or the literal match against the shipped file fails.

use crate::patch::PatchSpec;

/// The one file this tool reads and rewrites, relative to the current
/// working directory.
pub const TARGET_FILE: &str = "app_new.js";

/// `updateWeekDisplay()` as shipped, up to its closing brace.
const WEEK_DISPLAY_SEARCH: &str = r#"    updateWeekDisplay() {
        const displayElement = document.getElementById('weekDisplay');
        if (displayElement) {
            displayElement.textContent = formatWeekDisplay(this.currentWeekKey);
        }
    }"#;

/// Same method with the navigation-element visibility block appended.
const WEEK_DISPLAY_REPLACEMENT: &str = r#"    updateWeekDisplay() {
        const displayElement = document.getElementById('weekDisplay');
        if (displayElement) {
            displayElement.textContent = formatWeekDisplay(this.currentWeekKey);
        }
        
        // Ensure all navigation elements remain visible
        const prevBtn = document.getElementById('prevWeek');
        const nextBtn = document.getElementById('nextWeek');
        const copyBtn = document.getElementById('copyFromLastWeek');
        const reportLink = document.querySelector('.report-link');
        
        if (prevBtn) prevBtn.style.display = 'inline-block';
        if (nextBtn) nextBtn.style.display = 'inline-block';
        if (copyBtn) copyBtn.style.display = 'inline-block';
        if (reportLink) reportLink.style.display = 'inline-block';
        
        console.log('Week display updated, all buttons visible');
    }"#;

/// The `mealDate` input initialization as shipped.
const DATE_INPUT_SEARCH: &str = r#"        const dateInput = document.getElementById('mealDate');
        if (dateInput) {
            dateInput.value = formatDate(new Date());
        }"#;

/// Same block with the browser min/max date restrictions stripped.
const DATE_INPUT_REPLACEMENT: &str = r#"        const dateInput = document.getElementById('mealDate');
        if (dateInput) {
            dateInput.value = formatDate(new Date());
            // Remove browser-imposed date restrictions to allow past dates
            dateInput.removeAttribute('min');
            dateInput.removeAttribute('max');
        }"#;

/// The ordered fix set. Order matters: specs run against progressively
/// mutated content, though the two built-in targets never overlap.
pub fn builtin_fixes() -> Vec<PatchSpec> {
    vec![
        PatchSpec::new(
            "Fix 1",
            "updateWeekDisplay method updated",
            "Could not find updateWeekDisplay method",
            WEEK_DISPLAY_SEARCH,
            WEEK_DISPLAY_REPLACEMENT,
        ),
        PatchSpec::new(
            "Fix 2",
            "Date restrictions removed",
            "Could not find date input initialization",
            DATE_INPUT_SEARCH,
            DATE_INPUT_REPLACEMENT,
        ),
    ]
}
