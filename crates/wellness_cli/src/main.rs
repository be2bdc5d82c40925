//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `wellness_core` linkage without a UI host.
//! - Run one free-text check-in passed as arguments.

use std::process::ExitCode;
use wellness_core::WellnessSession;

fn main() -> ExitCode {
    println!("wellness_core ping={}", wellness_core::ping());
    println!("wellness_core version={}", wellness_core::core_version());

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if text.trim().is_empty() {
        return ExitCode::SUCCESS;
    }

    let session = WellnessSession::default();
    match session.check_in(&text) {
        Ok(check_in) => {
            println!("mood={:?} stress={:?}", check_in.mood, check_in.stress);
            println!("circle={}", check_in.circle);
            println!("plan={}", check_in.relief_plan);
            println!("suggestion={}", check_in.suggestion);
            println!("tip={}", session.daily_tip());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
