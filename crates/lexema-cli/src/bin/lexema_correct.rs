// lexema-correct: Print the spelling correction of each word.
//
// Reads words from the arguments, or from stdin one per line, and prints
// the correction found in the reference vocabulary:
//
//   word -> correction
//   word (no correction)
//
// Usage:
//   lexema-correct [-d DATA_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --data-path PATH     Data directory containing tagged.tsv
//   --max-distance N         Maximum edit distance of a correction (default: 1)
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use lexema_es::{CorrectionCache, CorrectorOptions, SpellCorrector};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) =
        lexema_cli::parse_data_path(&args).unwrap_or_else(|e| lexema_cli::fatal(&e));

    if lexema_cli::wants_help(&args) {
        println!("lexema-correct: Correct misspelled Spanish words.");
        println!();
        println!("Usage: lexema-correct [-d DATA_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, corrects each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH     Data directory containing tagged.tsv");
        println!("  --max-distance N         Maximum edit distance of a correction (default: 1)");
        println!("  -h, --help               Print this help");
        return;
    }

    let mut options = CorrectorOptions::default();
    let mut words: Vec<String> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--max-distance" {
            let value = iter
                .next()
                .unwrap_or_else(|| lexema_cli::fatal("--max-distance requires a value"));
            options.max_distance = value
                .parse()
                .unwrap_or_else(|_| lexema_cli::fatal("invalid number for --max-distance"));
        } else if arg.starts_with('-') {
            lexema_cli::fatal(&format!("unknown option: {arg}"));
        } else {
            words.push(arg.clone());
        }
    }

    lexema_cli::init_logging();

    let lexicon =
        lexema_cli::load_lexicon(data_path.as_deref()).unwrap_or_else(|e| lexema_cli::fatal(&e));
    let corrector = lexicon.corrector(options);
    let mut cache = CorrectionCache::new();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            print_correction(word, &corrector, &mut cache, &mut out);
        }
    } else {
        for word in &words {
            print_correction(word, &corrector, &mut cache, &mut out);
        }
    }
}

fn print_correction(
    word: &str,
    corrector: &SpellCorrector<'_>,
    cache: &mut CorrectionCache,
    out: &mut impl Write,
) {
    let word = word.to_lowercase();
    let _ = match corrector.correct(&word, cache) {
        Some(corrected) => writeln!(out, "{word} -> {corrected}"),
        None => writeln!(out, "{word} (no correction)"),
    };
}
