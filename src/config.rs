//! Token configuration.
//!
//! The integration token comes from the `NOTION_API_TOKEN` environment
//! variable, falling back to a `.env.local` file in the working
//! directory so the tool picks up the same file the web app uses.

use std::collections::HashMap;
use std::path::Path;
use std::{env, fs, io};

/// Environment variable holding the Notion integration token
pub const TOKEN_ENV: &str = "NOTION_API_TOKEN";

/// Env file consulted when the variable is unset
pub const ENV_FILE: &str = ".env.local";

/// Resolve the integration token from the environment, then from
/// `.env.local`. Returns `None` when neither yields a value.
pub fn load_token() -> Option<String> {
    if let Ok(token) = env::var(TOKEN_ENV) {
        if !token.is_empty() {
            return Some(token);
        }
    }

    let mut vars = read_env_file(Path::new(ENV_FILE)).ok()?;
    vars.remove(TOKEN_ENV).filter(|token| !token.is_empty())
}

/// Read an env file into a key/value map
pub fn read_env_file(path: &Path) -> io::Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_env_file(&content))
}

/// Parse env-file content: one KEY=VALUE per line, blank lines and
/// `#` comments skipped, values split on the first `=` with
/// surrounding quotes stripped.
pub fn parse_env_file(content: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
            .unwrap_or(value);

        vars.insert(key.to_string(), value.to_string());
    }

    vars
}
