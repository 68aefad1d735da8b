// Exit codes, typed error mapping, and the run path
// (args → roster → balance → write → summary).

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Bad arguments, missing columns, malformed roster.
    pub const VALIDATION: i32 = 2;
    /// Unusable group configuration (empty or duplicate set).
    pub const CONFIG: i32 = 3;
    /// Read/write failures.
    pub const IO: i32 = 4;
}

use std::path::Path;
use std::process::ExitCode;

use args::{parse_and_validate as parse_cli, Args};
use hb_algo::{balance, BalanceError, BalanceReport};
use hb_core::{GroupSet, ShuffleRng};
use hb_io::{sorted_output_path, IoError, Roster};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    Validation(String),
    Config(String),
    Io(String),
}

impl MainError {
    fn message(&self) -> &str {
        match self {
            MainError::Validation(m) | MainError::Config(m) | MainError::Io(m) => m,
        }
    }
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("hb: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    let rc = match run_once(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("hb: error: {}", e.message());
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

/// Map typed errors to the exit-code table.
fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Config(_) => CONFIG,
        MainError::Io(_) => IO,
    }
}

/// Translate hb_io errors into MainError buckets.
fn map_io_err(e: IoError) -> MainError {
    match e {
        IoError::MissingColumn { .. } | IoError::Csv(_) | IoError::Invalid(_) => {
            MainError::Validation(e.to_string())
        }
        IoError::Read { .. } | IoError::Write { .. } => MainError::Io(e.to_string()),
    }
}

fn run_once(args: &Args) -> Result<(), MainError> {
    // 1) Group configuration
    let groups = GroupSet::new(&args.groups).map_err(|e| MainError::Config(e.to_string()))?;
    if groups.is_empty() {
        return Err(MainError::Config("at least one group is required".into()));
    }

    // 2) Load + column validation
    let mut roster = Roster::read(&args.input, &args.name_column, &args.group_column)
        .map_err(map_io_err)?;
    let mut records = roster.records(&groups);

    // 3) Balance (seed override for reproducible runs)
    let mut rng = match args.seed {
        Some(seed) => ShuffleRng::from_seed_u64(seed),
        None => ShuffleRng::from_entropy(),
    };
    let report = balance(&mut records, &groups, &mut rng).map_err(|e| match e {
        BalanceError::EmptyGroupSet => MainError::Config(e.to_string()),
    })?;

    // 4) Write the balanced roster
    roster.apply(&records).map_err(map_io_err)?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| sorted_output_path(&args.input));
    roster.write(&out).map_err(map_io_err)?;

    // 5) Console summary (observational only)
    if !args.quiet {
        print_summary(&groups, &report, &out);
    }
    Ok(())
}

fn print_summary(groups: &GroupSet, report: &BalanceReport, out: &Path) {
    println!("Current distribution:");
    for (group, count) in groups.iter().zip(&report.before) {
        println!("  {group}: {count}");
    }
    println!("Total records: {}", report.total);
    println!("Already assigned: {}", report.preassigned);
    println!("Need to assign: {}", report.unassigned);
    println!("Target per group: {:.1}", report.target);
    println!("Additional members needed:");
    for (group, need) in groups.iter().zip(&report.needs) {
        println!("  {group}: {need}");
    }
    println!("Final distribution:");
    for (group, count) in groups.iter().zip(&report.after) {
        println!("  {group}: {count}");
    }
    println!("Results written to {}", out.display());
}
