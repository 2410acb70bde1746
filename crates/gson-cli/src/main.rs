//! `gson` CLI — parse, check, and inspect gson documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Parse stdin and print the tree as pretty JSON
//! echo '{"name":"Alice","age":30}' | gson parse
//!
//! # Parse a file and print the Rust debug form
//! gson parse -i example.json --format debug
//!
//! # Compact JSON output to a file
//! gson parse -i example.json -o out.json --compact
//!
//! # Validate only
//! gson check -i example.json
//!
//! # Node counts and nesting depth
//! gson stats -i example.json
//! ```
//!
//! Set `RUST_LOG=debug` to see parser events on stderr.

use anyhow::{Context, Result};
use bstr::ByteSlice;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use gson_core::{Value, ValueKind};
use std::collections::BTreeMap;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gson", version, about = "Parse and inspect gson documents")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print the resulting value tree
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// How to render the parsed tree
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Single-line output instead of indented
        #[arg(long)]
        compact: bool,
    },
    /// Parse a document and report only whether it is well-formed
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show node counts per kind and the maximum nesting depth
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// JSON via serde_json
    Json,
    /// Rust `Debug` representation
    Debug,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    match command {
        Commands::Parse {
            input,
            output,
            format,
            compact,
        } => {
            let bytes = read_input(input.as_deref())?;
            let value = gson_core::parse(&bytes).context("Failed to parse input")?;
            let mut rendered = render(&value, format, compact)?;
            rendered.push('\n');
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let bytes = read_input(input.as_deref())?;
            let value = gson_core::parse(&bytes).context("Failed to parse input")?;
            println!("ok: {} ({} bytes)", value.kind(), bytes.len());
        }
        Commands::Stats { input } => {
            let bytes = read_input(input.as_deref())?;
            let value = gson_core::parse(&bytes).context("Failed to parse input")?;
            let stats = Stats::collect(&value);
            println!("Input size:  {} bytes", bytes.len());
            println!("Max depth:   {}", stats.max_depth);
            for kind in ValueKind::ALL {
                let count = stats.counts.get(&kind).copied().unwrap_or(0);
                println!("{:<12} {}", format!("{}:", kind), count);
            }
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn render(value: &Value, format: Format, compact: bool) -> Result<String> {
    let out = match (format, compact) {
        (Format::Json, false) => serde_json::to_string_pretty(&to_json(value))?,
        (Format::Json, true) => serde_json::to_string(&to_json(value))?,
        (Format::Debug, false) => format!("{:#?}", value),
        (Format::Debug, true) => format!("{:?}", value),
    };
    Ok(out)
}

/// Convert a parsed tree into `serde_json::Value` for printing.
///
/// Floats that JSON cannot represent (NaN, infinities) become `null`; the parser
/// never produces them, but `Value` can still be built by hand. String bytes that
/// are not valid UTF-8 are shown as U+FFFD, here only; the parsed tree keeps them.
fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(n) => serde_json::Value::Number((*n).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.to_str_lossy().into_owned()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.to_str_lossy().into_owned(), to_json(v)))
                .collect(),
        ),
    }
}

/// Per-kind node counts and nesting depth of a value tree.
///
/// A scalar root has depth 0; each enclosing array or object adds one.
#[derive(Debug, Default)]
struct Stats {
    counts: BTreeMap<ValueKind, usize>,
    max_depth: usize,
}

impl Stats {
    fn collect(value: &Value) -> Self {
        let mut stats = Stats::default();
        stats.visit(value, 0);
        stats
    }

    fn visit(&mut self, value: &Value, depth: usize) {
        *self.counts.entry(value.kind()).or_insert(0) += 1;
        self.max_depth = self.max_depth.max(depth);
        match value {
            Value::Array(items) => {
                for item in items {
                    self.visit(item, depth + 1);
                }
                self.max_depth = self.max_depth.max(depth + 1);
            }
            Value::Object(map) => {
                for item in map.values() {
                    self.visit(item, depth + 1);
                }
                self.max_depth = self.max_depth.max(depth + 1);
            }
            Value::Null
            | Value::Boolean(_)
            | Value::Integer(_)
            | Value::Float(_)
            | Value::String(_) => {}
        }
    }
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    let bytes = match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))?,
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    debug!(len = bytes.len(), source = path.unwrap_or("<stdin>"), "read input");
    Ok(bytes)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
