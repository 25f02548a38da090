mod report;

use credence::analyze_verbose;
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let res = analyze_verbose(&config.input);

    if config.json {
        match serde_json::to_string_pretty(&res.analysis) {
            Ok(body) => println!("{body}"),
            Err(err) => {
                eprintln!("error: failed to serialize analysis: {err}");
                std::process::exit(1);
            }
        }
    } else {
        report::print_run(&config.input, &res, config.color);
    }
}

struct CliConfig {
    input: String,
    json: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("credence {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--json" => json = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    // The engine itself accepts empty input; an explicit `--input ""` is
    // allowed. Only bail out when no input source was given at all.
    let input = match input {
        Some(value) => value,
        None => {
            let buffer = read_stdin_input()?;
            if buffer.trim().is_empty() {
                return Err(format!("error: no input provided\n\n{}", help_text()));
            }
            buffer
        }
    };

    Ok(CliConfig { input, json, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "credence {version}

Rule-based text credibility scoring CLI.

Usage:
  credence [OPTIONS] [--] <input...>
  credence [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to analyze. If omitted, reads remaining
                             args or stdin when no args are provided.
  --json                     Print the analysis as JSON (the response schema)
                             instead of the human-readable report.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
