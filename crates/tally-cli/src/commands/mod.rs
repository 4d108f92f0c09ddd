pub mod generate;
pub mod navigate;
pub mod resolve;
pub mod routes;

use std::collections::BTreeMap;

use tally_router::Params;

/// Parses a `key=value` argument
pub fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got `{}`", arg)),
    }
}

/// Parameters sorted by name for stable output
pub fn sorted(params: &Params) -> BTreeMap<&str, &str> {
    params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

/// Renders parameters as `{id: abc, token: t}`
pub fn format_params(params: &Params) -> String {
    let body = sorted(params)
        .into_iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}
