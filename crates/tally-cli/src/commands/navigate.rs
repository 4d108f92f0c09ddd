use anyhow::Result;
use colored::Colorize;
use tally_router::{MemoryHistory, NavigationState, Navigator, Router};

use super::format_params;

/// Replays each step and prints the state after it
///
/// Rejected navigations are reported and the replay continues, as a host
/// shell would keep the current page.
pub fn execute(router: &Router, history: MemoryHistory, steps: &[String], json: bool) -> Result<()> {
    let mut navigator = Navigator::new(router, history)?;
    print_state(0, "(start)", &navigator.current(), json)?;

    for (i, step) in steps.iter().enumerate() {
        let result = match step.as_str() {
            "back" => navigator.back().map(|_| ()),
            "forward" => navigator.forward().map(|_| ()),
            url => navigator.navigate(url),
        };

        match result {
            Ok(()) => {
                print_state(i + 1, step, &navigator.current(), json)?;
            }
            Err(err) => {
                tracing::debug!(step = %step, "navigation step rejected");
                eprintln!("{} {} {}", format!("[{}]", i + 1).dimmed(), "✗".red(), err);
            }
        }
    }

    if !json {
        println!();
        println!("History: {}", navigator.history().entries().join(" → ").dimmed());
    }

    Ok(())
}

fn print_state(step: usize, label: &str, state: &NavigationState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(state)?);
        return Ok(());
    }

    println!(
        "{} {:<36} {} {}",
        format!("[{}]", step).dimmed(),
        label,
        state.page.as_str().green(),
        format_params(&state.params)
    );
    Ok(())
}
