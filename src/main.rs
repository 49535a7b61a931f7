mod debug_report;

use soundlaw::{IpaClassifier, Options, RawNotation, extract_vowel_changes_with, normalize_notation_verbose_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let options = Options { max_variants: config.max_variants };
    let classifier = IpaClassifier::new();

    for (index, line) in config.input.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
        let raw = RawNotation { id: format!("cli-{index}"), branch_id: "cli".to_string(), text: line.to_string() };
        let outcome = normalize_notation_verbose_with(&raw, &options);
        let records: Vec<_> =
            outcome.rules.iter().map(|rule| extract_vowel_changes_with(rule, &classifier, &options)).collect();
        debug_report::print_notation(line, &outcome, &records, config.color);
    }
}

struct CliConfig {
    input: String,
    color: bool,
    max_variants: usize,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut max_variants = Options::default().max_variants;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("soundlaw {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--max-variants" => {
                let value = args.next().ok_or_else(|| "error: --max-variants expects a value".to_string())?;
                max_variants = parse_max_variants(&value)?;
            }
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
            _ if arg.starts_with("--max-variants=") => {
                let value = arg.trim_start_matches("--max-variants=");
                max_variants = parse_max_variants(value)?;
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

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, color, max_variants })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_max_variants(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(format!("error: invalid --max-variants '{value}' (expected a positive integer)")),
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "soundlaw {version}

Sound-change notation normalizer CLI.

Usage:
  soundlaw [OPTIONS] [--] <notation...>
  soundlaw [OPTIONS] --input <text>

Each non-empty input line is treated as one sound-change notation, e.g.
`dʒ → tʃ → ʃ / V_V`.

Options:
  -i, --input <text>         Notation text to parse. If omitted, reads remaining
                             args or stdin when no args are provided.
  --max-variants <n>         Ceiling on optional/alternation expansion per
                             notation. Default: {default_max_variants}
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_max_variants = Options::default().max_variants
    )
}
