//! CLI entry point for dls

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dls::{ExcludeList, OutputOptions, TreeWalker, WalkConfig, print_json, print_report};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dls")]
#[command(about = "List the files inside a container or other restricted environment")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show all entries, including dev, proc, sys, and .git
    #[arg(short, long)]
    all: bool,

    /// Show the errors encountered during the walk
    #[arg(short = 'e', long = "errors")]
    errors: bool,

    /// Show the total size of all files
    #[arg(short = 't', long = "total")]
    total: bool,

    /// Exclude entries starting with NAME (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Output the report in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    // The walker assumes a readable directory root; check up front so the
    // user gets one clear message instead of a failed walk.
    match std::fs::metadata(&args.path) {
        Ok(meta) if !meta.is_dir() => {
            eprintln!("dls: '{}': Not a directory", args.path.display());
            process::exit(1);
        }
        Err(err) => {
            eprintln!("dls: cannot access '{}': {}", args.path.display(), err);
            process::exit(1);
        }
        Ok(_) => {}
    }

    let excludes = ExcludeList::default().with_names(args.ignore.clone());
    let walker = TreeWalker::new(WalkConfig {
        include_all: args.all,
        excludes,
    });

    let report = match walker.walk(&args.path) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("dls: {}", err);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&report)
    } else {
        print_report(
            &report,
            &OutputOptions {
                use_color: should_use_color(args.color),
                show_errors: args.errors,
                show_total: args.total,
            },
        )
    };

    if let Err(err) = result {
        eprintln!("dls: error writing output: {}", err);
        process::exit(1);
    }
}
