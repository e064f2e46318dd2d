mod debug_report;

use chrono::NaiveDateTime;
use riddlepass::{
    Clipboard, Clock, CopyButton, FixedClock, LevelId, RandomSource, SeededRandom, Session, SystemClock, ThreadRandom,
    build_level,
};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: LevelId = 1;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    init_tracing(config.log.as_deref());

    let script = match read_script(config.script.as_ref()) {
        Ok(script) => script,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    let steps = match parse_script(&script) {
        Ok(steps) => steps,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut random: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    let clock: Box<dyn Clock> = match config.at {
        Some(at) => Box::new(FixedClock(at)),
        None => Box::new(SystemClock),
    };

    let level = match build_level(config.level, random.as_mut()) {
        Ok(level) => level,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let palette = debug_report::Palette::new(config.color);
    let mut session = Session::start(level, clock.as_ref(), random.as_mut());
    debug_report::print_header(&session, &palette);

    let mut clipboard = Terminal;
    let mut button = CopyButton::new();
    for step in steps {
        match step {
            Step::Input(candidate) => match session.input(candidate.clone()) {
                Ok(board) => debug_report::print_board(&candidate, &board, &palette),
                Err(err) => debug_report::print_rejected(&err.to_string(), &palette),
            },
            Step::Restart => {
                session.restart();
                debug_report::print_note("restarted", &palette);
            }
            Step::Finalize => match session.finalize() {
                Ok(password) => debug_report::print_password(password, &palette),
                Err(err) => debug_report::print_rejected(&err.to_string(), &palette),
            },
            Step::Copy(order) => match session.copy_hint(order) {
                Ok(hint) => button.press(hint, &mut clipboard, clock.now()),
                Err(err) => debug_report::print_rejected(&err.to_string(), &palette),
            },
        }
    }
}

struct CliConfig {
    level: LevelId,
    seed: Option<u64>,
    at: Option<NaiveDateTime>,
    script: Option<PathBuf>,
    color: bool,
    log: Option<String>,
}

/// One line of a replay script.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Input(String),
    Restart,
    Finalize,
    Copy(usize),
}

/// Stands in for the system clipboard: copied text goes to stdout.
struct Terminal;

impl Clipboard for Terminal {
    fn set_text(&mut self, text: &str) {
        println!("  copied: {text}");
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn parse_args() -> Result<CliConfig, String> {
    let mut level = DEFAULT_LEVEL;
    let mut seed = None;
    let mut at = None;
    let mut script = None;
    let mut log = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("riddlepass {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--level" | "-l" => level = parse_level(&expect_value(&mut args, "--level")?)?,
            "--seed" => seed = Some(parse_seed(&expect_value(&mut args, "--seed")?)?),
            "--at" => at = Some(parse_at(&expect_value(&mut args, "--at")?)?),
            "--log" => log = Some(expect_value(&mut args, "--log")?),
            "--script" | "-s" => {
                if script.is_some() {
                    return Err("error: script provided multiple times".to_string());
                }
                script = Some(PathBuf::from(expect_value(&mut args, "--script")?));
            }
            _ if arg.starts_with("--level=") => level = parse_level(arg.trim_start_matches("--level="))?,
            _ if arg.starts_with("--seed=") => seed = Some(parse_seed(arg.trim_start_matches("--seed="))?),
            _ if arg.starts_with("--at=") => at = Some(parse_at(arg.trim_start_matches("--at="))?),
            _ if arg.starts_with("--log=") => log = Some(arg.trim_start_matches("--log=").to_string()),
            _ if arg.starts_with("--script=") => {
                if script.is_some() {
                    return Err("error: script provided multiple times".to_string());
                }
                script = Some(PathBuf::from(arg.trim_start_matches("--script=")));
            }
            _ => return Err(format!("error: unknown option '{arg}'\n\n{}", help_text())),
        }
    }

    Ok(CliConfig { level, seed, at, script, color, log })
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("error: {flag} expects a value"))
}

fn parse_level(value: &str) -> Result<LevelId, String> {
    value.parse().map_err(|_| format!("error: invalid --level '{value}' (expected a level number)"))
}

fn parse_seed(value: &str) -> Result<u64, String> {
    value.parse().map_err(|_| format!("error: invalid --seed '{value}' (expected an unsigned integer)"))
}

fn parse_at(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("error: invalid --at '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn read_script(path: Option<&PathBuf>) -> Result<String, String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("error: failed to read script '{}': {err}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
            Ok(buffer)
        }
    }
}

/// Every line is a candidate, except directives starting with `:`. A leading
/// `::` escapes a candidate that itself starts with `:`.
fn parse_script(script: &str) -> Result<Vec<Step>, String> {
    script
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Some(escaped) = line.strip_prefix("::") {
                return Ok(Step::Input(format!(":{escaped}")));
            }
            let Some(directive) = line.strip_prefix(':') else {
                return Ok(Step::Input(line.to_string()));
            };

            let mut words = directive.split_whitespace();
            match (words.next(), words.next(), words.next()) {
                (Some("restart"), None, _) => Ok(Step::Restart),
                (Some("finalize"), None, _) => Ok(Step::Finalize),
                (Some("copy"), Some(order), None) => order
                    .parse()
                    .map(Step::Copy)
                    .map_err(|_| format!("error: line {}: invalid rule order '{order}'", index + 1)),
                _ => Err(format!("error: line {}: unknown directive '{line}'", index + 1)),
            }
        })
        .collect()
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "riddlepass {version}

Replays a script of password candidates against a level and prints the board
after every step.

Usage:
  riddlepass [OPTIONS] [--script <file>]

Script (one entry per line, read from stdin when --script is omitted):
  <text>                     Type <text> as the new candidate.
  ::<text>                   Candidate that starts with ':'.
  :restart                   Clear the candidate and the unlocked rules.
  :finalize                  Generate the password if every rule holds.
  :copy <order>              Copy the hint of a visible rule.

Options:
  -l, --level <id>           Level to play. Default: {default_level}
  -s, --script <file>        Read the script from a file.
  --seed <u64>               Seed for puzzle variants and the target number.
  --at <timestamp>           Lock the clock at YYYY-MM-DDTHH:MM:SS.
  --log <filter>             Log filter (tracing EnvFilter syntax). Falls back
                             to RUST_LOG, then 'warn'.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  2  Invalid arguments, unreadable script or unknown level.
",
        version = env!("CARGO_PKG_VERSION"),
        default_level = DEFAULT_LEVEL
    )
}
