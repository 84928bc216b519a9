//! CLI utility helpers

use boolmin::{Config, Error, OutputFormat, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Value following `long` or `short` in the argument list
pub fn flag_value<'a>(args: &'a [String], long: &str, short: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == long || a == short)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Parse a comma-separated term list such as `1, 3,5`. Blank entries are skipped.
pub fn parse_terms(input: &str) -> Result<Vec<i64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let invalid = || Error::Other(format!("Invalid term '{}': expected an integer", s));
            s.parse::<i64>().map_err(|_| invalid())
        })
        .collect()
}

/// Load `--config <file>` if given, otherwise look in the current directory
pub fn load_config(args: &[String]) -> Result<Config> {
    match flag_value(args, "--config", "-c") {
        Some(path) => Config::load(Path::new(path)),
        None => {
            let cwd = std::env::current_dir().map_err(Error::Io)?;
            Config::discover(&cwd)
        }
    }
}

/// Output format after applying `--json` over the config
pub fn output_format(args: &[String], config: &Config) -> OutputFormat {
    if has_flag(args, "--json") {
        OutputFormat::Json
    } else {
        config.output.format
    }
}

pub fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Parse --output argument to determine output file path
pub fn parse_output_arg(args: &[String]) -> Option<PathBuf> {
    flag_value(args, "--output", "-o").map(PathBuf::from)
}

/// Write content to file or stdout
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(Error::Io)?;
            eprintln!("Written to: {}", p.display());
        }
        None => {
            println!("{}", content.trim_end());
        }
    }
    Ok(())
}
