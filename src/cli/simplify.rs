//! Simplification commands: simplify, batch

use super::util::{
    flag_value, load_config, output_format, parse_output_arg, parse_terms, to_json, write_output,
};
use boolmin::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

const SIMPLIFY_USAGE: &str = "Usage: boolmin simplify --minterms <list> [--vars N] \
                              [--mode sop|pos] [--dont-cares <list>] [--json]";

pub fn cmd_simplify(args: &[String]) -> Result<()> {
    let Some(minterms) = flag_value(args, "--minterms", "-m") else {
        return Err(SIMPLIFY_USAGE.into());
    };

    let config = load_config(args)?;

    let num_vars = match flag_value(args, "--vars", "-n") {
        Some(n) => n
            .parse::<i64>()
            .map_err(|_| Error::Other(format!("Invalid variable count '{}'", n)))?,
        None => config.defaults.num_vars as i64,
    };

    let request = SimplifyRequest {
        minterms: parse_terms(minterms)?,
        num_vars,
        mode: flag_value(args, "--mode", "-M")
            .map(str::to_string)
            .unwrap_or_else(|| config.defaults.mode.to_string()),
        dont_cares: match flag_value(args, "--dont-cares", "-d") {
            Some(list) => parse_terms(list)?,
            None => Vec::new(),
        },
    };

    let result = request.simplify()?;

    let content = match output_format(args, &config) {
        OutputFormat::Json => to_json(&result, config.output.pretty)?,
        OutputFormat::Text => result.to_report(),
    };
    write_output(&parse_output_arg(args), &content)
}

/// One line of batch output
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum BatchEntry {
    Ok(Simplification),
    Err { error: String },
}

fn load_requests(path: &Path) -> Result<Vec<SimplifyRequest>> {
    let content = fs::read_to_string(path).map_err(Error::Io)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(serde_norway::from_str(&content)?)
    }
}

pub fn cmd_batch(args: &[String]) -> Result<()> {
    let Some(path) = args.first().filter(|a| !a.starts_with('-')) else {
        return Err("Usage: boolmin batch <requests.yaml|requests.json> [--json]".into());
    };

    let config = load_config(args)?;
    let requests = load_requests(Path::new(path))?;
    log::info!("{} requests from {}", requests.len(), path);

    let entries: Vec<BatchEntry> = requests
        .iter()
        .map(|req| match req.simplify() {
            Ok(result) => BatchEntry::Ok(result),
            Err(e) => BatchEntry::Err {
                error: e.to_string(),
            },
        })
        .collect();
    let failed = entries
        .iter()
        .filter(|e| matches!(e, BatchEntry::Err { .. }))
        .count();

    let content = match output_format(args, &config) {
        OutputFormat::Json => to_json(&entries, config.output.pretty)?,
        OutputFormat::Text => {
            let mut out = String::new();
            for (i, entry) in entries.iter().enumerate() {
                match entry {
                    BatchEntry::Ok(result) => {
                        out.push_str(&format!("[{}] {}", i + 1, result.to_report()))
                    }
                    BatchEntry::Err { error } => {
                        out.push_str(&format!("[{}] error: {}\n", i + 1, error))
                    }
                }
            }
            out
        }
    };
    write_output(&parse_output_arg(args), &content)?;

    if failed > 0 {
        let message = format!("{} of {} requests failed", failed, entries.len());
        Err(message.into())
    } else {
        Ok(())
    }
}
