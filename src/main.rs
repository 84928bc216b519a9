//! boolmin CLI - Command-line interface
//!
//! Commands:
//!   simplify - Simplify one function given on the command line
//!   batch    - Simplify every request in a YAML or JSON file
//!   schema   - Print JSON schema for requests, results, or config

mod cli;

use boolmin::VERSION;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    init_logging(&args);

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "simplify" => cli::cmd_simplify(&args[2..]),
        "batch" => cli::cmd_batch(&args[2..]),
        "schema" => cli::cmd_schema(&args[2..]),
        "version" | "--version" | "-V" => {
            println!("boolmin {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// `-v` raises the level once per occurrence; `BOOLMIN_LOG` sets it directly
fn init_logging(args: &[String]) {
    let verbosity = args
        .iter()
        .map(|a| match a.as_str() {
            "-v" | "--verbose" => 1,
            "-vv" => 2,
            _ => 0,
        })
        .sum::<usize>();

    let level = match verbosity {
        0 => std::env::var("BOOLMIN_LOG")
            .ok()
            .and_then(|v| v.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // A second logger cannot be installed; nothing to do then
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn print_usage() {
    println!(
        r#"
boolmin - Boolean function minimizer (2-4 variables)

USAGE:
    boolmin <COMMAND> [OPTIONS]

COMMANDS:
    simplify --minterms <list>       Simplify one function
    batch <file.yaml|file.json>      Simplify a list of requests
    schema [request|result|config]   Print JSON schema
    version                          Print version

OPTIONS:
    -m, --minterms <list>    Comma-separated minterms, e.g. 1,3,5,7
    -d, --dont-cares <list>  Comma-separated don't-care terms
    -n, --vars <N>           Number of variables, 2-4 (default: 3)
    -M, --mode <sop|pos>     Output form (default: sop)
    -c, --config <file>      Config file (default: ./boolmin.yaml if present)
    -o, --output <file>      Output file (default: stdout)
    --json                   JSON output
    -v, --verbose            More logging (repeat for trace); BOOLMIN_LOG also works

EXAMPLES:
    boolmin simplify -m 1,3,5,7 -n 3
    boolmin simplify -m 0,1,2 -d 3 -n 2 --mode pos --json
    boolmin batch requests.yaml
"#
    );
}
