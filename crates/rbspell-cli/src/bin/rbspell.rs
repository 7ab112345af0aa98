// rbspell: Report the words of one or more documents that are not in a
// dictionary, with autocorrect suggestions.
//
// Usage:
//   rbspell [OPTIONS] <dictionary-file> [input-files...]
//
// Each input prints:
//   Checking file '<path>'.
//   <unknown word>
//   Did you mean: '<suggestion>'?

use std::io;

use log::warn;
use rbspell_check::{Dictionary, SpellChecker};
use rbspell_cli::fatal;

fn print_help() {
    println!("rbspell: Report words that are not in a dictionary.");
    println!();
    println!("Usage: rbspell [OPTIONS] <dictionary-file> [input-files...]");
    println!();
    println!("Reads standard input when no input file (or '-') is given.");
    println!(
        "The dictionary is taken from -d, then ${}, then the first argument.",
        rbspell_cli::DICT_ENV
    );
    println!();
    println!("Options:");
    println!("  -d, --dict-path PATH        Dictionary word list");
    println!("      --no-suggest            Do not run autocorrect");
    println!("  -n, --max-suggestions N     Suggestions per unknown word (default 1)");
    println!("      --buckets N             Dictionary hash buckets (default 524288)");
    println!("      --json                  Print one JSON report per input");
    println!("  -v, --verbose               More log output on stderr (repeat for debug)");
    println!("  -h, --help                  Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if rbspell_cli::wants_help(&args) {
        print_help();
        return;
    }

    let options = rbspell_cli::parse_args(&args).unwrap_or_else(|e| fatal(&e));
    if let Err(e) = rbspell_cli::init_logging(options.verbosity) {
        eprintln!("warning: {e}");
    }

    let (dict_path, inputs) =
        rbspell_cli::resolve_dictionary(&options).unwrap_or_else(|e| fatal(&e));
    let dictionary = Dictionary::load_file(&dict_path, options.dictionary_options())
        .unwrap_or_else(|e| fatal(&e.to_string()));
    let checker = SpellChecker::new(dictionary, options.check_options());

    if checker.dictionary().is_empty() {
        warn!("dictionary {} has no words; every word will be reported", dict_path.display());
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let failed = rbspell_cli::run_inputs(&inputs, options.json, &mut out, |input| {
        rbspell_cli::check_input(&checker, input)
    })
    .unwrap_or_else(|e| fatal(&e));

    if failed {
        std::process::exit(1);
    }
}
