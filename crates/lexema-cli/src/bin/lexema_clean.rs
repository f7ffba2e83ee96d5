// lexema-clean: Run the full clean-corpus pipeline over a text.
//
// Tokenizes, cleans, drops stopwords, classifies (correcting misspelled
// nouns), drops function words, unifies inflected forms, collects synonyms
// and counts frequencies, then prints the results report.
//
// Usage:
//   lexema-clean [-d DATA_PATH] [OPTIONS] [TEXT...]
//
// Options:
//   -d, --data-path PATH     Data directory containing tagged.tsv
//   --no-correct             Classify without spelling correction
//   --timing                 Log each stage's duration
//   --max-distance N         Maximum edit distance of a correction (default: 1)
//   --legacy-conjunctions    Map unrecognized parser markers to conjunctions
//   --json                   Print the results as JSON
//   -h, --help               Print help

use lexema_es::{Corpus, CorpusError, CorpusOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) =
        lexema_cli::parse_data_path(&args).unwrap_or_else(|e| lexema_cli::fatal(&e));

    if lexema_cli::wants_help(&args) {
        println!("lexema-clean: Run the clean-corpus pipeline over a Spanish text.");
        println!();
        println!("Usage: lexema-clean [-d DATA_PATH] [OPTIONS] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, they are joined with spaces.");
        println!("Otherwise the text is read from stdin.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH     Data directory containing tagged.tsv");
        println!("  --no-correct             Classify without spelling correction");
        println!("  --timing                 Log each stage's duration");
        println!("  --max-distance N         Maximum edit distance of a correction (default: 1)");
        println!("  --legacy-conjunctions    Map unrecognized parser markers to conjunctions");
        println!("  --json                   Print the results as JSON");
        println!("  -h, --help               Print this help");
        return;
    }

    let mut options = CorpusOptions::default();
    let mut correct = true;
    let mut json = false;
    let mut words: Vec<String> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--no-correct" => correct = false,
            "--timing" => options.timing = true,
            "--legacy-conjunctions" => options.classifier.legacy_conjunction_fallback = true,
            "--json" => json = true,
            "--max-distance" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| lexema_cli::fatal("--max-distance requires a value"));
                options.corrector.max_distance = value
                    .parse()
                    .unwrap_or_else(|_| lexema_cli::fatal("invalid number for --max-distance"));
            }
            a if a.starts_with('-') => lexema_cli::fatal(&format!("unknown option: {a}")),
            _ => words.push(arg.clone()),
        }
    }

    lexema_cli::init_logging();

    let text = lexema_cli::read_text(&words).unwrap_or_else(|e| lexema_cli::fatal(&e));
    let lexicon =
        lexema_cli::load_lexicon(data_path.as_deref()).unwrap_or_else(|e| lexema_cli::fatal(&e));

    let mut corpus = Corpus::with_options(&lexicon, text.trim(), options);
    run_pipeline(&mut corpus, correct).unwrap_or_else(|e| lexema_cli::fatal(&e.to_string()));

    if json {
        let value = serde_json::json!({
            "text": corpus.text(),
            "tokens": corpus.tokens(),
            "analysis": corpus.analysis(),
            "synonyms": corpus.synonyms(),
            "frequencies": corpus.frequencies().map(|f| f.entries()),
            "corrections": corpus.corrected_words(),
        });
        match serde_json::to_string_pretty(&value) {
            Ok(s) => println!("{s}"),
            Err(e) => lexema_cli::fatal(&format!("failed to encode JSON: {e}")),
        }
    } else {
        print!("{}", corpus.report());
    }
}

fn run_pipeline(corpus: &mut Corpus<'_>, correct: bool) -> Result<(), CorpusError> {
    corpus.tokenize()?;
    corpus.clean()?;
    corpus.filter_stop_words()?;
    corpus.analyze(correct)?;
    corpus.clean_post_analysis()?;
    corpus.unify_tokens()?;
    corpus.synonymize()?;
    corpus.calculate_frequencies()?;
    Ok(())
}
