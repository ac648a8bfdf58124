//! CLI entry point for ftop

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;
use std::time::SystemTime;

use clap::{Parser, ValueEnum};
use ftop::walk::parse_time_bound;
use ftop::{
    ConfigError, JsonReport, OrderingPolicy, OutputConfig, SortKey, StderrReporter, TextFormatter,
    TopKSelector, Traverser, WalkerConfig, print_json,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

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
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

/// Attribute to rank files by
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Value {
    /// Largest first
    #[default]
    Size,
    /// Most recently modified first
    Date,
    /// Alphabetical by file name
    Name,
}

impl From<Value> for SortKey {
    fn from(value: Value) -> Self {
        match value {
            Value::Size => SortKey::Size,
            Value::Date => SortKey::Date,
            Value::Name => SortKey::Name,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ftop")]
#[command(about = "List the top files under one or more directories by size, date or name")]
#[command(version)]
struct Args {
    /// Files or directories to scan
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Number of files to list
    #[arg(short = 'n', long = "count", default_value = "10")]
    count: usize,

    /// Reverse the sort order
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Skip hidden files and directories (names starting with '.')
    #[arg(short = 'f', long = "ignore-hidden")]
    ignore_hidden: bool,

    /// Value to rank files by
    #[arg(short = 'v', long = "value", value_name = "VALUE", default_value = "size")]
    value: Value,

    /// Ignore files and directories matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Only count files modified more recently than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w, 3months, 1y
    #[arg(long = "newer", value_name = "DURATION")]
    newer: Option<String>,

    /// Only count files modified longer than DURATION ago
    #[arg(long = "older", value_name = "DURATION")]
    older: Option<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn init_tracing() {
    // Silent unless RUST_LOG is set; stdout is reserved for results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

fn walker_config(args: &Args) -> Result<WalkerConfig, ConfigError> {
    let now = SystemTime::now();
    let newer_than = args
        .newer
        .as_deref()
        .map(|s| parse_time_bound("newer", s, now))
        .transpose()?;
    let older_than = args
        .older
        .as_deref()
        .map(|s| parse_time_bound("older", s, now))
        .transpose()?;

    Ok(WalkerConfig {
        ignore_hidden: args.ignore_hidden,
        ignore_patterns: args.ignore.clone(),
        max_depth: args.level,
        newer_than,
        older_than,
    })
}

/// Join a root onto the working directory, dropping `.` components.
fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    cwd.join(path).components().collect()
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let traverser = match walker_config(&args).and_then(Traverser::new) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("ftop: {}", e);
            process::exit(1);
        }
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let roots: Vec<PathBuf> = args
        .paths
        .iter()
        .map(|p| absolutize(&cwd, p))
        .collect();

    let policy = OrderingPolicy::new(args.value.into(), args.reverse);
    let mut selector = TopKSelector::new(policy, args.count);
    let mut reporter = StderrReporter::new();
    traverser.walk_all(&roots, &mut selector, &mut reporter);

    let totals = selector.totals();
    tracing::info!(
        files = totals.num_entries,
        bytes = totals.sum_size,
        errors = reporter.errors(),
        "walk finished"
    );

    let result = if args.json {
        print_json(&JsonReport::new(policy, selector.results(), totals))
    } else {
        let formatter = TextFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
            key: policy.key(),
        });
        formatter.print(selector.results(), totals)
    };

    match result {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("ftop: error writing output: {}", e);
            process::exit(1);
        }
    }
}
