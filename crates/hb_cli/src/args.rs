//! CLI argument surface: parsing, validation, seed syntax.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use hb_core::DEFAULT_GROUPS;

/// Parsed CLI arguments (raw).
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hb",
    about = "Balance a student roster across houses, respecting existing assignments"
)]
pub struct Args {
    /// Input roster CSV (header row required).
    pub input: PathBuf,

    /// Output path. Defaults to `<input stem>_sorted.<ext>` next to the input.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Header name of the identifier column.
    #[arg(long, default_value = "Student Name")]
    pub name_column: String,

    /// Header name of the group label column.
    #[arg(long, default_value = "House")]
    pub group_column: String,

    /// Comma-separated group names, in reporting order.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_GROUPS.map(String::from))]
    pub groups: Vec<String>,

    /// Shuffle seed for reproducible runs. Accepts decimal u64 or 0x-hex
    /// (≤16 hex digits). Omit for a fresh shuffle each run.
    #[arg(long, value_parser = parse_seed)]
    pub seed: Option<u64>,

    /// Suppress the console summary.
    #[arg(long)]
    pub quiet: bool,
}

/// Errors surfaced by argument validation (clap handles syntax itself).
#[derive(Debug)]
pub enum CliError {
    NotFound(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound(path) => write!(f, "input file not found: {path}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Entry point used by main.rs: parse, then check the input path points at
/// a regular file.
pub fn parse_and_validate() -> Result<Args, CliError> {
    let args = Args::parse();
    let meta = fs::metadata(&args.input)
        .map_err(|_| CliError::NotFound(args.input.display().to_string()))?;
    if !meta.is_file() {
        return Err(CliError::NotFound(args.input.display().to_string()));
    }
    Ok(args)
}

/// Seed parser: decimal u64 or 0x-hex (1..=16 nybbles).
pub fn parse_seed(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty seed".into());
    }
    if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if rest.is_empty() || rest.len() > 16 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("hex seed must be 1..16 hex digits".into());
        }
        u64::from_str_radix(rest, 16).map_err(|_| "hex seed out of range".into())
    } else {
        s.parse::<u64>()
            .map_err(|_| "decimal seed must be a valid u64".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parser_decimal_and_hex() {
        assert_eq!(parse_seed("42").unwrap(), 42);
        assert_eq!(parse_seed("0x2A").unwrap(), 42);
        assert_eq!(parse_seed("0X2a").unwrap(), 42);
        assert!(parse_seed("0x").is_err());
        assert!(parse_seed("0xFFFFFFFFFFFFFFFFF").is_err()); // 17 nybbles
        assert!(parse_seed("-1").is_err());
        assert!(parse_seed("").is_err());
    }

    #[test]
    fn defaults_match_the_reference_roster() {
        let args = Args::parse_from(["hb", "students.csv"]);
        assert_eq!(args.name_column, "Student Name");
        assert_eq!(args.group_column, "House");
        assert_eq!(args.groups, ["saphine", "topaz", "agat", "ruby"]);
        assert!(args.seed.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn groups_flag_splits_on_commas() {
        let args = Args::parse_from(["hb", "r.csv", "--groups", "red,blue,green"]);
        assert_eq!(args.groups, ["red", "blue", "green"]);
    }
}
