use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use tally_router::{Page, Router};

#[derive(Serialize)]
struct RouteRow<'a> {
    pattern: &'a str,
    page: Page,
    name: Option<&'a str>,
}

pub fn execute(router: &Router, json: bool) -> Result<()> {
    let rows: Vec<RouteRow<'_>> = router
        .routes()
        .iter()
        .map(|route| RouteRow {
            pattern: route.pattern(),
            page: route.page(),
            name: route.name(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{}", "Routes (match order):".green().bold());
    for row in rows {
        println!(
            "  {:<40} {:<16} {}",
            row.pattern.cyan(),
            row.page.as_str(),
            row.name.unwrap_or("-").dimmed()
        );
    }

    Ok(())
}
