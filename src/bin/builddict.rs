//! Convert a plain word list into the game's dictionary files.
//!
//! Usage: `builddict <input.txt> [output.json] [--min-len N] [--max-len N]`
//!
//! Writes a sorted JSON array of words to `output.json` and a
//! length -> initial -> words index next to it as `output.optimized.json`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use letterfall::core::{index_by_length_and_initial, Dictionary};
use letterfall::types::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

#[derive(Debug, Parser)]
#[command(
    name = "builddict",
    about = "Filter a word list into letterfall dictionary files"
)]
struct Args {
    /// Word list, one word per line.
    input: PathBuf,

    /// JSON array output; the index is written next to it.
    #[arg(default_value = "dictionary.json")]
    output: PathBuf,

    /// Shortest word kept.
    #[arg(long, default_value_t = MIN_WORD_LENGTH)]
    min_len: usize,

    /// Longest word kept.
    #[arg(long, default_value_t = MAX_WORD_LENGTH)]
    max_len: usize,
}

impl Args {
    fn bounds(&self) -> Result<(usize, usize)> {
        if self.min_len == 0 || self.min_len > self.max_len {
            bail!("invalid length bounds {}-{}", self.min_len, self.max_len);
        }
        Ok((self.min_len, self.max_len))
    }
}

fn optimized_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dictionary".to_string());
    output.with_file_name(format!("{stem}.optimized.json"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let (min_len, max_len) = args.bounds()?;

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let dictionary = Dictionary::parse_txt(&text, min_len, max_len)?;
    let words = dictionary.sorted_words();
    info!(
        words = words.len(),
        min_len,
        max_len,
        "filtered word list"
    );

    let json = serde_json::to_string(&words)?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("writing {}", args.output.display()))?;

    let index = index_by_length_and_initial(words.iter().copied());
    let optimized = optimized_path(&args.output);
    std::fs::write(&optimized, serde_json::to_string(&index)?)
        .with_context(|| format!("writing {}", optimized.display()))?;

    for (len, by_initial) in &index {
        let count: usize = by_initial.values().map(Vec::len).sum();
        info!(len, count, "words by length");
    }
    info!(
        output = %args.output.display(),
        optimized = %optimized.display(),
        "dictionary written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_arguments() {
        let a = Args::try_parse_from(["builddict", "words.txt"]).unwrap();
        assert_eq!(a.output, PathBuf::from("dictionary.json"));
        assert_eq!(a.bounds().unwrap(), (MIN_WORD_LENGTH, MAX_WORD_LENGTH));
    }

    #[test]
    fn length_flags_override_defaults() {
        let a = Args::try_parse_from([
            "builddict", "w.txt", "o.json", "--min-len", "4", "--max-len", "7",
        ])
        .unwrap();
        assert_eq!(a.output, PathBuf::from("o.json"));
        assert_eq!(a.bounds().unwrap(), (4, 7));
    }

    #[test]
    fn rejects_bad_bounds() {
        assert!(Args::try_parse_from(["builddict"]).is_err());
        assert!(Args::try_parse_from(["builddict", "w.txt", "--min-len", "x"]).is_err());
        let zero = Args::try_parse_from(["builddict", "w.txt", "--min-len", "0"]).unwrap();
        assert!(zero.bounds().is_err());
        let inverted =
            Args::try_parse_from(["builddict", "w.txt", "--min-len", "6", "--max-len", "3"])
                .unwrap();
        assert!(inverted.bounds().is_err());
    }

    #[test]
    fn optimized_path_sits_next_to_output() {
        assert_eq!(
            optimized_path(Path::new("out/words.json")),
            PathBuf::from("out/words.optimized.json")
        );
    }
}
