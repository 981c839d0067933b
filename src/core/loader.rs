//! Loader for `department;course;credits` source files

use crate::core::error::{RegistryError, Result};
use crate::core::models::{parse_credits, Course, Registry};
use crate::{debug, info};
use std::fs;
use std::path::Path;

/// Field separator used by the source format
pub const FIELD_SEPARATOR: char = ';';

/// Load a registry from a source file
///
/// # Arguments
/// * `path` - Path to the source file
///
/// # Returns
/// A `Registry` holding every record of the file
///
/// Failures are only logged at debug level; reporting them is up to the caller.
///
/// # Errors
/// - `RegistryError::SourceUnavailable` if the file cannot be read
/// - any error of [`parse_registry_str`]; no partial registry is returned
pub fn load_registry<P: AsRef<Path>>(path: P) -> Result<Registry> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        debug!("Failed to read {}: {source}", path.display());
        RegistryError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let registry = parse_registry_str(&content).inspect_err(|e| {
        debug!("Failed to load {}: {e}", path.display());
    })?;

    info!(
        "Loaded {} departments from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

/// Parse source text into a registry
///
/// Every line must hold exactly three `;`-separated fields: department, course
/// name and credits. Trailing whitespace on each line is dropped. Courses keep
/// file order within their department, even when a department's lines are not
/// contiguous.
///
/// # Errors
/// - `RegistryError::MalformedRecord` for the first line without exactly three fields
/// - `RegistryError::InvalidCredits` for the first credits field that is not an integer
pub fn parse_registry_str(content: &str) -> Result<Registry> {
    let mut registry = Registry::new();

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let (department, course) = parse_record(raw, line_no)?;
        registry.insert(department, course);
    }

    debug!("Parsed {} departments", registry.len());
    Ok(registry)
}

/// Parse one source line into its department key and course
fn parse_record(raw: &str, line_no: usize) -> Result<(&str, Course)> {
    let line = raw.trim_end();
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

    let [department, name, credits] = fields[..] else {
        return Err(RegistryError::MalformedRecord {
            line: line_no,
            fields: fields.len(),
        });
    };

    let credits = parse_credits(credits).map_err(|_| RegistryError::InvalidCredits {
        value: credits.to_string(),
        line: Some(line_no),
    })?;

    Ok((department, Course::new(name, credits)))
}
