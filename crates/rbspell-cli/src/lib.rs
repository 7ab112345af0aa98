// rbspell-cli: argument parsing, logging setup, the per-input run loop and
// report rendering for the `rbspell` binary.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use log::error;
use rbspell_check::dictionary::DEFAULT_BUCKET_COUNT;
use rbspell_check::{CheckError, CheckOptions, CheckReport, DictionaryOptions, SpellChecker};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Environment variable consulted when no `-d` is given.
pub const DICT_ENV: &str = "RBSPELL_DICT";

/// Input name that stands for standard input.
pub const STDIN_INPUT: &str = "-";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub dict_path: Option<String>,
    /// Positional arguments, in order.
    pub positionals: Vec<String>,
    pub suggest: bool,
    pub max_suggestions: usize,
    pub bucket_count: usize,
    pub json: bool,
    pub verbosity: u8,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            dict_path: None,
            positionals: Vec::new(),
            suggest: true,
            max_suggestions: 1,
            bucket_count: DEFAULT_BUCKET_COUNT,
            json: false,
            verbosity: 0,
        }
    }
}

impl CliOptions {
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            suggest: self.suggest,
            max_suggestions: self.max_suggestions,
        }
    }

    pub fn dictionary_options(&self) -> DictionaryOptions {
        DictionaryOptions {
            bucket_count: self.bucket_count,
        }
    }
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            let val = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
            dict_path = Some(val.clone());
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((dict_path, remaining))
}

fn parse_count(flag: &str, value: Option<&str>) -> Result<usize, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a value"))?;
    value
        .parse()
        .map_err(|_| format!("{flag} expects a number, got '{value}'"))
}

/// Number of `v`s in a `-v`, `-vv`, `-vvv`... flag.
fn verbose_count(arg: &str) -> Option<u8> {
    let vs = arg.strip_prefix('-')?;
    if vs.is_empty() || !vs.bytes().all(|b| b == b'v') {
        return None;
    }
    Some(u8::try_from(vs.len()).unwrap_or(u8::MAX))
}

/// Parse the full command line (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let (dict_path, rest) = parse_dict_path(args)?;
    let mut options = CliOptions {
        dict_path,
        ..CliOptions::default()
    };
    let mut iter = rest.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--no-suggest" => options.suggest = false,
            "--json" => options.json = true,
            "--verbose" => options.verbosity = options.verbosity.saturating_add(1),
            "-n" | "--max-suggestions" => {
                options.max_suggestions = parse_count(arg, iter.next().map(String::as_str))?;
            }
            "--buckets" => {
                options.bucket_count = parse_count(arg, iter.next().map(String::as_str))?;
            }
            STDIN_INPUT => options.positionals.push(arg.clone()),
            _ => {
                if let Some(val) = arg.strip_prefix("--max-suggestions=") {
                    options.max_suggestions = parse_count("--max-suggestions", Some(val))?;
                } else if let Some(val) = arg.strip_prefix("--buckets=") {
                    options.bucket_count = parse_count("--buckets", Some(val))?;
                } else if let Some(count) = verbose_count(arg) {
                    options.verbosity = options.verbosity.saturating_add(count);
                } else if arg.starts_with('-') {
                    return Err(format!("unknown option '{arg}'"));
                } else {
                    options.positionals.push(arg.clone());
                }
            }
        }
    }

    if options.bucket_count == 0 {
        return Err("--buckets must be at least 1".to_string());
    }
    Ok(options)
}

/// Pick the dictionary file and the inputs to check.
///
/// Search order:
/// 1. `-d`/`--dict-path`
/// 2. `env_path` (the `RBSPELL_DICT` variable)
/// 3. the first positional argument
///
/// No inputs means standard input.
pub fn resolve_dictionary_with(
    dict_path: Option<String>,
    env_path: Option<String>,
    mut positionals: Vec<String>,
) -> Result<(PathBuf, Vec<String>), String> {
    let dict = match dict_path.or(env_path) {
        Some(path) => path,
        None if !positionals.is_empty() => positionals.remove(0),
        None => return Err(format!("no dictionary given (use -d PATH or set {DICT_ENV})")),
    };
    if positionals.is_empty() {
        positionals.push(STDIN_INPUT.to_string());
    }
    Ok((PathBuf::from(dict), positionals))
}

/// [`resolve_dictionary_with`] reading `RBSPELL_DICT` from the environment.
pub fn resolve_dictionary(options: &CliOptions) -> Result<(PathBuf, Vec<String>), String> {
    let env_path = std::env::var(DICT_ENV).ok().filter(|p| !p.is_empty());
    resolve_dictionary_with(options.dict_path.clone(), env_path, options.positionals.clone())
}

/// Log level for a `-v` count: warnings by default, then info, then debug.
pub fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Route `log` output to stderr.
pub fn init_logging(verbosity: u8) -> Result<(), String> {
    TermLogger::init(
        log_level(verbosity),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .map_err(|e| format!("failed to initialize logging: {e}"))
}

/// Write a report in the plain text format.
pub fn render_text<W: Write>(out: &mut W, report: &CheckReport) -> io::Result<()> {
    writeln!(out, "Checking file '{}'.", report.source)?;
    for m in &report.misspellings {
        writeln!(out, "{}", m.word)?;
        for suggestion in &m.suggestions {
            writeln!(out, "Did you mean: '{suggestion}'?")?;
        }
    }
    Ok(())
}

/// Write a report as one pretty-printed JSON document.
pub fn render_json<W: Write>(out: &mut W, report: &CheckReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// Check one input: a file path, or standard input for `-`.
pub fn check_input(checker: &SpellChecker, input: &str) -> Result<CheckReport, CheckError> {
    if input == STDIN_INPUT {
        checker.check_reader("<stdin>", io::stdin().lock())
    } else {
        checker.check_file(Path::new(input))
    }
}

/// Check every input in order and render each report to `out`.
///
/// An input that cannot be read is logged and skipped. Returns `Ok(true)` if
/// any input failed. A corrupt word set or an output error stops the run
/// with `Err`.
pub fn run_inputs<W, F>(
    inputs: &[String],
    json: bool,
    out: &mut W,
    mut check: F,
) -> Result<bool, String>
where
    W: Write,
    F: FnMut(&str) -> Result<CheckReport, CheckError>,
{
    let mut failed = false;
    for input in inputs {
        let report = match check(input) {
            Ok(report) => report,
            Err(e) if e.is_fatal() => return Err(format!("{input}: {e}")),
            Err(e) => {
                error!("{input}: {e}");
                failed = true;
                continue;
            }
        };
        let written = if json {
            render_json(out, &report)
        } else {
            render_text(out, &report)
        };
        written
            .and_then(|()| out.flush())
            .map_err(|e| format!("failed to write output: {e}"))?;
    }
    Ok(failed)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
