use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::LaunchError;

use super::Environment;

pub const ENV_FILE_NAME: &str = ".env";

/// Candidate `.env` locations for a launcher living in `launcher_dir`:
/// one level up first, then alongside the launcher.
pub fn search_paths(launcher_dir: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Some(parent) = launcher_dir.parent() {
        paths.push(parent.join(ENV_FILE_NAME));
    }
    paths.push(launcher_dir.join(ENV_FILE_NAME));
    paths
}

/// Apply the first existing file in `search_paths` on top of `env`.
///
/// Returns the path that was loaded, or `None` when no candidate exists, in
/// which case `env` is left untouched.
pub fn load(
    search_paths: &[PathBuf],
    env: &mut Environment,
) -> Result<Option<PathBuf>, LaunchError> {
    let Some(path) = search_paths.iter().find(|p| p.is_file()) else {
        info!("no {ENV_FILE_NAME} file found, using the process environment");
        return Ok(None);
    };

    let contents = fs::read_to_string(path).map_err(|source| LaunchError::EnvFile {
        path: path.clone(),
        source,
    })?;

    let entries = parse(&contents);
    info!(path = %path.display(), entries = entries.len(), "loaded environment file");
    env.extend(entries);
    Ok(Some(path.clone()))
}

/// Parse `KEY=VALUE` lines. Blank lines and `#` comments are ignored, an
/// `export ` prefix is accepted and quoted values are unquoted with shell
/// rules. Malformed lines are skipped.
pub fn parse(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_line(idx + 1, line))
        .collect()
}

fn parse_line(line_no: usize, raw: &str) -> Option<(String, String)> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line
        .strip_prefix("export ")
        .map(str::trim_start)
        .unwrap_or(line);

    let Some((key, value)) = line.split_once('=') else {
        warn!(line = line_no, "skipping environment line without `=`");
        return None;
    };
    let key = key.trim();
    if key.is_empty() {
        warn!(line = line_no, "skipping environment line with an empty key");
        return None;
    }

    Some((key.to_string(), unquote(line_no, value.trim())))
}

/// A quoted value must be a single shell word; anything else is kept verbatim.
fn unquote(line_no: usize, value: &str) -> String {
    if !value.starts_with(['"', '\'']) {
        return value.to_string();
    }
    match shell_words::split(value) {
        Ok(mut words) if words.len() == 1 => words.remove(0),
        Ok(_) => {
            warn!(
                line = line_no,
                "unexpected text after quoted environment value, keeping it verbatim"
            );
            value.to_string()
        }
        Err(_) => {
            warn!(
                line = line_no,
                "unterminated quote in environment value, keeping it verbatim"
            );
            value.to_string()
        }
    }
}
