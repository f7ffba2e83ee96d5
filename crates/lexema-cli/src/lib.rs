// lexema-cli: shared utilities for CLI tools.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use lexema_es::{Lexicon, SpanishInflector, StopWords, SynonymTable, WordList};

/// Data directory name under the user's home and system prefixes.
const DATA_SUBDIR: &str = "es";

/// Tagged corpus file name. The only required file.
const TAGGED: &str = "tagged.tsv";

const STOPWORDS: &str = "stopwords.txt";
const SYNSETS: &str = "synsets.tsv";
const LEMMAS: &str = "lemmas.tsv";

/// Directory of foreign-language word lists (`*.txt`).
const FOREIGN_DIR: &str = "foreign";

/// Set up `env_logger`, defaulting to `info` so correction notices and
/// stage timings are shown. `RUST_LOG` overrides the default.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Search for a data directory and build a lexicon from it.
///
/// Search order:
/// 1. `data_path` argument (if provided)
/// 2. `LEXEMA_DATA_PATH` environment variable
/// 3. `~/.lexema/es`
/// 4. `/usr/share/lexema/es`
/// 5. Current working directory (looks for `tagged.tsv` directly)
pub fn load_lexicon(data_path: Option<&str>) -> Result<Lexicon, String> {
    let search_paths = build_search_paths(data_path);

    for dir in &search_paths {
        if dir.join(TAGGED).is_file() {
            log::debug!("loading data from {}", dir.display());
            return load_from_dir(dir);
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        TAGGED,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build a lexicon from the files in `dir`. Files other than the tagged
/// corpus are optional.
pub fn load_from_dir(dir: &Path) -> Result<Lexicon, String> {
    let tagged = read_file(&dir.join(TAGGED))?;
    let mut lexicon = Lexicon::from_tagged_text(TAGGED, &tagged).map_err(|e| e.to_string())?;

    if let Some(text) = read_optional(&dir.join(STOPWORDS))? {
        lexicon = lexicon.with_stop_words(StopWords::from_text(&text));
    }
    if let Some(text) = read_optional(&dir.join(LEMMAS))? {
        let inflector = SpanishInflector::from_text(LEMMAS, &text).map_err(|e| e.to_string())?;
        lexicon = lexicon.with_lemmatizer(inflector);
    }
    if let Some(text) = read_optional(&dir.join(SYNSETS))? {
        let synonyms = SynonymTable::from_text(SYNSETS, &text).map_err(|e| e.to_string())?;
        lexicon = lexicon.with_synonyms(synonyms);
    }
    for path in foreign_lists(&dir.join(FOREIGN_DIR))? {
        let words = WordList::from_text(&read_file(&path)?);
        log::debug!("foreign word list {} ({} words)", path.display(), words.len());
        lexicon = lexicon.with_foreign_dictionary(words);
    }

    Ok(lexicon)
}

/// `*.txt` files in `dir`, sorted by name. A missing directory is empty.
fn foreign_lists(dir: &Path) -> Result<Vec<PathBuf>, String> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let entries =
        std::fs::read_dir(dir).map_err(|e| format!("failed to read {}: {}", dir.display(), e))?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();
    Ok(paths)
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path.display(), e))
}

fn read_optional(path: &Path) -> Result<Option<String>, String> {
    if path.is_file() {
        read_file(path).map(Some)
    } else {
        Ok(None)
    }
}

/// Build the list of directories to search for data files.
fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var("LEXEMA_DATA_PATH") {
        paths.push(PathBuf::from(&env_path));
        paths.push(PathBuf::from(&env_path).join(DATA_SUBDIR));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".lexema").join(DATA_SUBDIR));
    }

    paths.push(PathBuf::from("/usr/share/lexema").join(DATA_SUBDIR));

    // Fallback for local development.
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--data-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(data_path, remaining_args)`.
pub fn parse_data_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut data_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--data-path=") {
            data_path = Some(val.to_string());
        } else if arg == "--data-path" || arg == "-d" {
            let val = iter
                .next()
                .ok_or_else(|| format!("{arg} requires a value"))?;
            data_path = Some(val.clone());
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((data_path, remaining))
}

/// The text given as positional arguments, or all of stdin if there are
/// none.
pub fn read_text(words: &[String]) -> Result<String, String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| format!("error reading stdin: {e}"))?;
    Ok(text)
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
