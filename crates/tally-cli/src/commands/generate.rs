use anyhow::{Context, Result};
use tally_router::{Params, Router};

pub fn execute(router: &Router, name: &str, params: Vec<(String, String)>, json: bool) -> Result<()> {
    let params: Params = params.into_iter().collect();
    let url = router
        .generate(name, &params)
        .with_context(|| format!("Failed to generate URL for route `{}`", name))?;

    if json {
        println!("{}", serde_json::json!({ "name": name, "url": url }));
    } else {
        println!("{}", url);
    }

    Ok(())
}
