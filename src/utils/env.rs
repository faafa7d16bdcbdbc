use crate::error::{ReviewAgentError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse environment variables from CLI arguments
pub fn parse_env_args(env_args: &[String]) -> Result<HashMap<String, String>> {
    let mut env_vars = HashMap::new();

    for arg in env_args {
        if let Some((key, value)) = arg.split_once('=') {
            env_vars.insert(key.to_string(), value.to_string());
        } else {
            return Err(ReviewAgentError::InvalidConfig(format!(
                "Invalid env format: {}. Expected KEY=VALUE",
                arg
            )));
        }
    }

    Ok(env_vars)
}

/// Load environment variables from file
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        ReviewAgentError::InvalidConfig(format!(
            "Failed to read env file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut env_vars = HashMap::new();
    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            env_vars.insert(key.trim().to_string(), unquote(value.trim()).to_string());
        } else {
            return Err(ReviewAgentError::InvalidConfig(format!(
                "Invalid env format at {}:{}: {}",
                path.display(),
                line_num + 1,
                line
            )));
        }
    }

    Ok(env_vars)
}

/// Strip one matching pair of surrounding quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Get inherited environment variables from host
pub fn get_inherited_vars(vars: &[String]) -> HashMap<String, String> {
    let mut env_vars = HashMap::new();

    for var in vars {
        if let Ok(value) = std::env::var(var) {
            env_vars.insert(var.clone(), value);
        }
    }

    env_vars
}

/// Collect the variables forwarded into the review container.
/// Precedence: --env flags > inherited host variables > env file.
pub fn collect_env_vars(
    cli_vars: &[String],
    env_file: Option<&Path>,
    inherit: &[String],
) -> Result<HashMap<String, String>> {
    let mut env_vars = HashMap::new();

    if let Some(path) = env_file {
        if path.exists() {
            env_vars.extend(load_env_file(path)?);
        }
    }

    env_vars.extend(get_inherited_vars(inherit));
    env_vars.extend(parse_env_args(cli_vars)?);

    Ok(env_vars)
}

/// Load a dotenv file into the process environment. A missing file is fine;
/// variables already set in the environment win.
pub fn load_dotenv(path: &Path) {
    if !path.exists() {
        return;
    }

    if let Err(e) = dotenvy::from_path(path) {
        eprintln!("Warning: failed to load {}: {}", path.display(), e);
    }
}

/// Report proxy variables that will shape outbound API traffic
pub fn report_proxies(vars: &[String]) {
    for var in vars {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                eprintln!("Using {} from the environment", var);
            }
        }
    }
}
