// lexema-analyze: Print the category of every content token of a text.
//
// Tokenizes, cleans and drops stopwords, then classifies each remaining
// token and prints one line per token:
//
//   token<TAB>category
//
// Usage:
//   lexema-analyze [-d DATA_PATH] [OPTIONS] [TEXT...]
//
// Options:
//   -d, --data-path PATH     Data directory containing tagged.tsv
//   --no-correct             Classify without spelling correction
//   --legacy-conjunctions    Map unrecognized parser markers to conjunctions
//   -h, --help               Print help

use std::io::{self, Write};

use lexema_core::AnalysisEntry;
use lexema_es::{Corpus, CorpusError, CorpusOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) =
        lexema_cli::parse_data_path(&args).unwrap_or_else(|e| lexema_cli::fatal(&e));

    if lexema_cli::wants_help(&args) {
        println!("lexema-analyze: Classify the content words of a Spanish text.");
        println!();
        println!("Usage: lexema-analyze [-d DATA_PATH] [OPTIONS] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, they are joined with spaces.");
        println!("Otherwise the text is read from stdin.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH     Data directory containing tagged.tsv");
        println!("  --no-correct             Classify without spelling correction");
        println!("  --legacy-conjunctions    Map unrecognized parser markers to conjunctions");
        println!("  -h, --help               Print this help");
        return;
    }

    let mut options = CorpusOptions::default();
    let mut correct = true;
    let mut words: Vec<String> = Vec::new();

    for arg in &args {
        match arg.as_str() {
            "--no-correct" => correct = false,
            "--legacy-conjunctions" => options.classifier.legacy_conjunction_fallback = true,
            a if a.starts_with('-') => lexema_cli::fatal(&format!("unknown option: {a}")),
            _ => words.push(arg.clone()),
        }
    }

    lexema_cli::init_logging();

    let text = lexema_cli::read_text(&words).unwrap_or_else(|e| lexema_cli::fatal(&e));
    let lexicon =
        lexema_cli::load_lexicon(data_path.as_deref()).unwrap_or_else(|e| lexema_cli::fatal(&e));

    let mut corpus = Corpus::with_options(&lexicon, text.trim(), options);
    let analysis =
        analyze(&mut corpus, correct).unwrap_or_else(|e| lexema_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for entry in analysis {
        let _ = writeln!(out, "{}\t{}", entry.token, entry.category);
    }
}

fn analyze<'c>(
    corpus: &'c mut Corpus<'_>,
    correct: bool,
) -> Result<&'c [AnalysisEntry], CorpusError> {
    corpus.tokenize()?;
    corpus.clean()?;
    corpus.filter_stop_words()?;
    corpus.analyze(correct)
}
