//! `arrify` CLI — convert between JSON and PHP array-literal source.
//!
//! ## Usage
//!
//! ```sh
//! # JSON → PHP array literal (stdin → stdout)
//! echo '{"name":"Alice","age":30}' | arrify render
//!
//! # Prettified, 4-space indent, single quotes
//! arrify render -i config.json --prettify --indent 4 --space --quote single
//!
//! # PHP array literal → pretty JSON
//! arrify parse -i config.php
//!
//! # Recover empty objects that the literal syntax cannot distinguish
//! echo 'array("opts"=>array());' | arrify parse --rules '{"opts":{}}'
//! ```

use anyhow::{Context, Result};
use arrify_core::{ParseOptions, PhpValue, Quote, RenderOptions};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "arrify",
    version,
    about = "JSON \u{2194} PHP array-literal converter"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum QuoteArg {
    Single,
    Double,
}

#[derive(Subcommand)]
enum Commands {
    /// Render JSON as a PHP array literal
    Render {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Insert newlines and indentation between entries
        #[arg(long)]
        prettify: bool,
        /// Indentation units per level (with --prettify)
        #[arg(long, default_value_t = 1)]
        indent: usize,
        /// Indent with spaces instead of tabs
        #[arg(long)]
        space: bool,
        /// Emit a comma after the last entry of every literal
        #[arg(long)]
        trailing_comma: bool,
        /// Quote character for strings and keys
        #[arg(long, value_enum, default_value = "double")]
        quote: QuoteArg,
    },
    /// Parse a PHP array literal back to JSON
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Inline JSON rule tree for empty-container disambiguation
        #[arg(long)]
        rules: Option<String>,
        /// Emit minified JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            prettify,
            indent,
            space,
            trailing_comma,
            quote,
        } => {
            let json = read_input(input.as_deref())?;
            let options = RenderOptions {
                prettify,
                indent,
                space,
                trailing_comma,
                quote: match quote {
                    QuoteArg::Single => Quote::Single,
                    QuoteArg::Double => Quote::Double,
                },
            };
            let php = arrify_core::arrify(&json, &options);
            write_output(output.as_deref(), &php)?;
        }
        Commands::Parse {
            input,
            output,
            rules,
            compact,
        } => {
            let source = read_input(input.as_deref())?;
            let options = ParseOptions {
                empty_rules: parse_rules(rules.as_deref())?,
            };
            let value = arrify_core::parse(&source, &options)
                .context("Failed to parse PHP array literal")?;
            let json_value = serde_json::Value::from(value);
            let json = if compact {
                serde_json::to_string(&json_value)?
            } else {
                serde_json::to_string_pretty(&json_value)?
            };
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

/// Parse the --rules argument: inline JSON mirroring the expected output
/// shape. Absent means no disambiguation rules.
fn parse_rules(rules: Option<&str>) -> Result<PhpValue> {
    match rules {
        Some(raw) => {
            let value: serde_json::Value = serde_json::from_str(raw)
                .context("--rules must be a valid JSON object")?;
            Ok(PhpValue::from(value))
        }
        None => Ok(PhpValue::Object(Vec::new())),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
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
