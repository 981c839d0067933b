//! Run command handler: load a source file and drive the command loop

use course_registry::config::Config;
use course_registry::core::{loader, session};
use course_registry::{error, info, verbose};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Load the registry and run the interactive loop on stdin/stdout.
///
/// A load failure is reported and ends the run without entering the loop.
///
/// # Arguments
/// * `file` - Source file from the command line, if any
/// * `config` - Configuration providing the fallback `default_file`
pub fn run(file: Option<PathBuf>, config: &Config) {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let path = match resolve_source(file, config, &mut input, &mut output) {
        Ok(Some(path)) => path,
        Ok(None) => {
            info!("No source file given");
            return;
        }
        Err(e) => {
            error!("Failed to read file name: {e}");
            return;
        }
    };

    let mut registry = match loader::load_registry(&path) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    verbose!(
        "✓ Loaded {} departments from: {}",
        registry.len(),
        path.display()
    );

    if let Err(e) = session::run(&mut registry, input, output) {
        error!("Command loop aborted: {e}");
    }
}

/// Pick the source file: command line first, then config, then ask the user.
///
/// Returns `Ok(None)` when the user closes input without answering.
fn resolve_source<R: BufRead, W: Write>(
    file: Option<PathBuf>,
    config: &Config,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<PathBuf>> {
    if let Some(path) = file {
        return Ok(Some(path));
    }
    if !config.registry.default_file.is_empty() {
        return Ok(Some(PathBuf::from(&config.registry.default_file)));
    }

    write!(output, "Enter file name: ")?;
    output.flush()?;
    let mut name = String::new();
    if input.read_line(&mut name)? == 0 {
        return Ok(None);
    }
    writeln!(output)?;
    Ok(Some(PathBuf::from(name.trim_end_matches(['\n', '\r']))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn empty_config() -> Config {
        let mut config = Config::from_defaults();
        config.registry.default_file.clear();
        config
    }

    #[test]
    fn test_cli_file_wins() {
        let mut config = empty_config();
        config.registry.default_file = "configured.txt".to_string();
        let mut output = Vec::new();

        let path = resolve_source(
            Some(PathBuf::from("given.txt")),
            &config,
            &mut Cursor::new(""),
            &mut output,
        )
        .unwrap();
        assert_eq!(path, Some(PathBuf::from("given.txt")));
        assert!(output.is_empty());
    }

    #[test]
    fn test_config_default_file() {
        let mut config = empty_config();
        config.registry.default_file = "configured.txt".to_string();

        let path = resolve_source(None, &config, &mut Cursor::new(""), &mut Vec::new()).unwrap();
        assert_eq!(path, Some(PathBuf::from("configured.txt")));
    }

    #[test]
    fn test_prompts_for_file_name() {
        let mut output = Vec::new();
        let path = resolve_source(
            None,
            &empty_config(),
            &mut Cursor::new("courses.txt\n"),
            &mut output,
        )
        .unwrap();

        assert_eq!(path, Some(PathBuf::from("courses.txt")));
        assert_eq!(String::from_utf8(output).unwrap(), "Enter file name: \n");
    }

    #[test]
    fn test_prompt_closed_input() {
        let path = resolve_source(None, &empty_config(), &mut Cursor::new(""), &mut Vec::new())
            .unwrap();
        assert!(path.is_none());
    }
}
