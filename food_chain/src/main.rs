// CLI entry point for reciting the rhyme.
//
// Prints one verse, a range of verses, or the whole song to stdout. A custom
// menagerie JSON can replace the built-in animal table, and `--expect` checks
// the recited text against a file, reporting the first differing line.
//
// Usage:
//   recite [OPTIONS]
//     --verse <N>             Recite only verse N
//     --start <N>             First verse of a range (default: 1)
//     --end <N>               Last verse of a range (default: last verse)
//     --menagerie <PATH>      Load the animal table from a JSON file
//     --expect <PATH>         Compare output with a file; exit 1 on mismatch

use std::path::{Path, PathBuf};

use food_chain::{Menagerie, default_menagerie, first_difference};

/// Which verses to recite.
enum Selection {
    Song,
    Verse(usize),
    Range { start: Option<usize>, end: Option<usize> },
}

struct Options {
    selection: Selection,
    menagerie: Option<PathBuf>,
    expect: Option<PathBuf>,
}

fn main() {
    let options = parse_args();

    let menagerie = match &options.menagerie {
        Some(path) => load_menagerie(path),
        None => default_menagerie().clone(),
    };

    let result = match options.selection {
        Selection::Song => Ok(menagerie.song()),
        Selection::Verse(n) => menagerie.verse(n),
        Selection::Range { start, end } => menagerie.verses(
            start.unwrap_or(1),
            end.unwrap_or(menagerie.verse_count()),
        ),
    };
    let text = match result {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Some(path) = &options.expect {
        let want = std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read {}: {e}", path.display());
            std::process::exit(1);
        });
        // Editors usually leave a trailing newline the recitation lacks.
        let want = want.strip_suffix('\n').unwrap_or(&want);
        if let Some(diff) = first_difference(&text, want) {
            eprintln!("Recitation does not match {}:", path.display());
            eprintln!("{diff}");
            std::process::exit(1);
        }
        eprintln!("Recitation matches {}.", path.display());
    }

    println!("{text}");
}

fn load_menagerie(path: &Path) -> Menagerie {
    let json = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    });
    Menagerie::from_json(&json).unwrap_or_else(|e| {
        eprintln!("Failed to load {}: {e}", path.display());
        std::process::exit(1);
    })
}

/// Parse command-line arguments. Uses simple `std::env::args()` matching.
fn parse_args() -> Options {
    let mut verse = None;
    let mut start = None;
    let mut end = None;
    let mut menagerie = None;
    let mut expect = None;
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--verse" => {
                i += 1;
                verse = Some(parse_number(&args, i, "--verse"));
            }
            "--start" => {
                i += 1;
                start = Some(parse_number(&args, i, "--start"));
            }
            "--end" => {
                i += 1;
                end = Some(parse_number(&args, i, "--end"));
            }
            "--menagerie" => {
                i += 1;
                menagerie = Some(parse_path(&args, i, "--menagerie"));
            }
            "--expect" => {
                i += 1;
                expect = Some(parse_path(&args, i, "--expect"));
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let selection = match (verse, start, end) {
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
            eprintln!("--verse cannot be combined with --start/--end");
            std::process::exit(1);
        }
        (Some(n), None, None) => Selection::Verse(n),
        (None, None, None) => Selection::Song,
        (None, start, end) => Selection::Range { start, end },
    };

    Options {
        selection,
        menagerie,
        expect,
    }
}

fn parse_number(args: &[String], i: usize, flag: &str) -> usize {
    args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        eprintln!("{flag} requires a verse number");
        std::process::exit(1);
    })
}

fn parse_path(args: &[String], i: usize, flag: &str) -> PathBuf {
    args.get(i).map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("{flag} requires a file path");
        std::process::exit(1);
    })
}

fn print_usage() {
    eprintln!("Usage: recite [--verse N | --start N --end M] [--menagerie PATH] [--expect PATH]");
}
