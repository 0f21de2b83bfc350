//! Render a TOML form definition to HTML.
//!
//! Usage:
//!   render-form form.toml              # XHTML output, settings from the file
//!   render-form form.toml --html       # force <tag></tag> pairs
//!   render-form form.toml -o out.html  # write to a file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use form_widgets::FormDefinition;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "render-form", version, about = "Render a TOML form definition to HTML")]
struct Cli {
    /// Path to the form definition
    form: PathBuf,

    /// Emit HTML tag pairs instead of self-closing XHTML tags
    #[arg(long)]
    html: bool,

    /// Override the charset declared in the form definition
    #[arg(long)]
    charset: Option<String>,

    /// Write the HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut definition = FormDefinition::load(&cli.form)
        .with_context(|| format!("Failed to load form definition: {}", cli.form.display()))?;

    if cli.html {
        definition.render.xhtml = false;
    }
    if let Some(charset) = cli.charset {
        definition.render.charset = charset;
    }

    let html = definition.render().context("Failed to render form")?;

    match cli.output {
        Some(path) => std::fs::write(&path, format!("{}\n", html))
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", html),
    }

    Ok(())
}
