use anyhow::{Context, Result};
use clap::Parser;
use sqlalign::{FormatOptions, format_sql_with, is_sql_file};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// sqlalign - align the columns of SQL INSERT ... VALUES statements
#[derive(Parser, Debug)]
#[command(name = "sqlalign")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Write aligned output back to files
    #[arg(short, long, conflicts_with = "check")]
    write: bool,

    /// List files that need alignment without touching them
    #[arg(long)]
    check: bool,

    /// JSON file with formatting options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Files or directories to align (none or - for stdin)
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
    }

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) if cli.check => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether any input needed alignment
fn run(cli: &Cli) -> Result<bool> {
    let options = match &cli.config {
        Some(path) => FormatOptions::from_file(path)
            .with_context(|| format!("failed to load options from {}", path.display()))?,
        None => FormatOptions::default(),
    };

    if cli.files.is_empty() {
        return align_stdin(cli, &options);
    }

    let mut needs_alignment = false;
    for path in &cli.files {
        if path == Path::new("-") {
            needs_alignment |= align_stdin(cli, &options)?;
            continue;
        }
        for file in discover_sql_files(path)? {
            needs_alignment |= align_file(&file, cli, &options)?;
        }
    }

    Ok(needs_alignment)
}

fn align_stdin(cli: &Cli, options: &FormatOptions) -> Result<bool> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let aligned = format_sql_with(&input, options);
    let changed = aligned.as_ref() != input;

    if cli.check {
        if changed {
            eprintln!("<stdin>: needs alignment");
        }
    } else {
        io::stdout()
            .write_all(aligned.as_bytes())
            .context("failed to write stdout")?;
    }

    Ok(changed)
}

fn align_file(path: &Path, cli: &Cli, options: &FormatOptions) -> Result<bool> {
    let input =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let aligned = format_sql_with(&input, options);
    let changed = aligned.as_ref() != input;

    if cli.check {
        if changed {
            eprintln!("{}: needs alignment", path.display());
        }
    } else if cli.write {
        if changed {
            fs::write(path, aligned.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "aligned INSERT statements");
        }
    } else {
        io::stdout()
            .write_all(aligned.as_bytes())
            .context("failed to write stdout")?;
    }

    Ok(changed)
}

/// Explicit file paths are taken as given; directories are searched for `.sql` files
fn discover_sql_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(path).follow_links(true) {
        let entry = entry.with_context(|| format!("failed to walk {}", path.display()))?;
        if entry.file_type().is_file() && is_sql_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();

    Ok(files)
}
