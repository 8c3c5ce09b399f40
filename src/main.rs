use anyhow::Result;
use std::path::Path;

use planner_patcher::fixes::{builtin_fixes, TARGET_FILE};
use planner_patcher::{patcher, report};

fn main() -> Result<()> {
    let fixes = builtin_fixes();

    // I/O failures abort here with a non-zero exit; per-fix misses do not.
    let run = patcher::run(Path::new(TARGET_FILE), &fixes)?;

    for (spec, outcome) in fixes.iter().zip(&run.outcomes) {
        println!("{}", report::status_line(spec, outcome));
    }

    println!();
    println!("{}", report::completion_line());

    Ok(())
}
