//! attorder CLI
//!
//! Reorders the attributes of every opening tag in HTML-like templates,
//! leaving everything else byte-for-byte as it was.
//!
//! - attorder -o id,class page.html        # print the result
//! - attorder -o id -o 'data-.*' -w *.html # rewrite files in place
//! - attorder --tree page.html             # dump the parsed nodes

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use attorder_common::warning;
use attorder_markup::{OrderSettings, Tokenizer, parse, print_tree, reorder_attributes};
use clap::Parser;

/// attorder: put template attributes in a fixed order
#[derive(Parser, Debug)]
#[command(name = "attorder")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Put id first, then class, then everything else alphabetically
    attorder -o id,class index.html

    # Angular-style bindings: structural first, then inputs, then outputs
    attorder -o '\*.*' -o '\[.*\]' -o '\(.*\)' -w src/app/*.html

    # Filter standard input
    cat page.html | attorder -o id,class

    # Show how a file is tokenized
    attorder --tokens page.html
"#)]
struct Cli {
    /// Regular expressions giving the attribute order, comma separated.
    /// Each must match a whole attribute name. Unmatched attributes follow
    /// in alphabetical order
    #[arg(short, long = "order", value_name = "PATTERNS", value_delimiter = ',')]
    order: Vec<String>,

    /// Write the result back to each file instead of standard output
    #[arg(short, long, conflicts_with = "stdio")]
    write: bool,

    /// Read standard input and write standard output (default without files)
    #[arg(long, conflicts_with = "files")]
    stdio: bool,

    /// Print the token stream instead of rewriting
    #[arg(long, conflicts_with_all = ["tree", "write"])]
    tokens: bool,

    /// Print the parsed nodes instead of rewriting
    #[arg(long, conflicts_with = "write")]
    tree: bool,

    /// Do not print warnings
    #[arg(short, long)]
    quiet: bool,

    /// Template files to process
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

/// What to do with each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Rewrite { in_place: bool },
    Tokens,
    Tree,
}

impl Cli {
    const fn mode(&self) -> Mode {
        if self.tokens {
            Mode::Tokens
        } else if self.tree {
            Mode::Tree
        } else {
            Mode::Rewrite {
                in_place: self.write,
            }
        }
    }

    fn settings(&self) -> Result<OrderSettings> {
        let patterns = self.order.iter().filter(|pattern| !pattern.is_empty());
        OrderSettings::new(patterns).context("invalid --order")
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    warning::set_warnings_enabled(!cli.quiet);

    let settings = cli.settings()?;
    let mode = cli.mode();

    if cli.stdio || cli.files.is_empty() {
        if let Mode::Rewrite { in_place: true } = mode {
            anyhow::bail!("--write needs at least one file");
        }
        let mut input = String::new();
        let _ = io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        let ok = report("<stdin>", run(&input, None, mode, &settings));
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let mut failed = 0usize;
    for path in &cli.files {
        let result = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
            .and_then(|input| run(&input, Some(path), mode, &settings));
        if !report(&path.display().to_string(), result) {
            failed += 1;
        }
    }
    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Process one document. `path` is where to write in place, if anywhere.
fn run(input: &str, path: Option<&Path>, mode: Mode, settings: &OrderSettings) -> Result<()> {
    match mode {
        Mode::Tokens => {
            for token in Tokenizer::new(input).tokens() {
                println!("{token}");
            }
        }
        Mode::Tree => print_tree(&parse(input, settings)?),
        Mode::Rewrite { in_place } => {
            let output = reorder_attributes(input, settings)?;
            match path {
                Some(path) if in_place => {
                    if output != input {
                        fs::write(path, output)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                    }
                }
                _ => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(output.as_bytes())?;
                    stdout.flush()?;
                }
            }
        }
    }
    Ok(())
}

/// Print the error of a failed document. Returns whether it succeeded.
fn report(name: &str, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warning::error("cli", &format!("{name}: {err:#}"));
            false
        }
    }
}
