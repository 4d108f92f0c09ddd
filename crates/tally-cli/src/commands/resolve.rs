use anyhow::Result;
use colored::Colorize;
use tally_router::Router;

use super::format_params;

pub fn execute(router: &Router, path: &str, json: bool) -> Result<()> {
    let route_match = router.resolve(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&route_match)?);
        return Ok(());
    }

    println!("{} {}", "✓".green(), route_match.page.as_str().bold());
    println!("  pattern: {}", route_match.pattern.cyan());
    println!("  name:    {}", route_match.name.as_deref().unwrap_or("-"));
    println!("  params:  {}", format_params(&route_match.params));

    Ok(())
}
