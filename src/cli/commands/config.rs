//! Config command handler

use crate::args::ConfigSubcommand;
use course_registry::config::Config;
use course_registry::{info, warn};
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None => Ok(describe(config, None)),
        Some(ConfigSubcommand::Get { key }) => Ok(describe(config, key.as_deref())),
        Some(ConfigSubcommand::Set { key, value }) => set_value(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_value(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => {
            handle_config_reset();
            return;
        }
    };

    match result {
        Ok(message) => print!("{message}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Render one value, or the whole config when no key is given
fn describe(config: &Config, key: Option<&str>) -> String {
    match key {
        Some(k) => config.get(k).map_or_else(
            || {
                warn!("Unknown config key requested: '{k}'");
                format!("Unknown config key: '{k}'\n")
            },
            |value| format!("{value}\n"),
        ),
        None => format!("\n=== Configuration ===\n\n{config}"),
    }
}

/// Set a value and persist the config
fn set_value(config: &mut Config, key: &str, value: &str) -> Result<String, String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Config {key} set to {value}");
    Ok(format!("✓ Set {key} = {value}\n"))
}

/// Reset a value to its default and persist the config
fn unset_value(config: &mut Config, defaults: &Config, key: &str) -> Result<String, String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("Config {key} reset to default");
    Ok(format!("✓ Reset {key} to default\n"))
}

/// Handle the config reset subcommand
fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_single_key() {
        let mut config = Config::from_defaults();
        config.registry.default_file = "courses.txt".to_string();

        assert_eq!(describe(&config, Some("default_file")), "courses.txt\n");
        assert_eq!(
            describe(&config, Some("nope")),
            "Unknown config key: 'nope'\n"
        );
    }

    #[test]
    fn test_describe_all() {
        let config = Config::from_defaults();
        let text = describe(&config, None);
        assert!(text.contains("=== Configuration ==="));
        assert!(text.contains("default_file"));
    }
}
