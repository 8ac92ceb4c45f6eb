//! CLI command definitions and dispatch

use crate::presenter::Presenter;
use crate::render::Renderer;
use clap::{Parser, Subcommand};
use sight_common::{Result, SightConfig};
use std::io::{BufRead, Read, Write};
use std::path::PathBuf;
use tracing::debug;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "hash-sight")]
#[command(version, about = "Identify likely hash types from their shape")]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true, overrides_with = "no_json")]
    pub json: bool,

    /// Output text cards even when the configuration file enables JSON
    #[arg(long, global = true, overrides_with = "json")]
    pub no_json: bool,

    /// Disable styled confidence badges
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the configuration file (default: $XDG_CONFIG_HOME/hash-sight/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Strings to classify; read from stdin when omitted
    pub hashes: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Classify every line read from stdin as it arrives
    Watch,

    /// List the supported hash types in evaluation order
    Types,
}

/// Effective output settings after merging the config file with flags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Emit JSON lines instead of text cards
    pub json: bool,
    /// Style confidence badges
    pub color: bool,
    /// Echo the raw input under each card
    pub show_input: bool,
}

impl Settings {
    /// Flags override the configuration file
    #[must_use]
    pub fn resolve(config: &SightConfig, cli: &Cli) -> Self {
        Self {
            json: if cli.no_json {
                false
            } else {
                cli.json || config.json
            },
            color: config.color && !cli.no_color,
            show_input: config.show_input,
        }
    }

    fn renderer(self) -> Renderer {
        Renderer::new(self.color, self.show_input)
    }
}

/// Run the parsed command against the given input and output streams
pub fn run<R: BufRead, W: Write>(cli: &Cli, mut input: R, out: &mut W) -> Result<()> {
    let config = SightConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&config, cli);
    debug!(?settings, "Resolved output settings");

    match &cli.command {
        Some(Commands::Types) => {
            out.write_all(settings.renderer().render_types().as_bytes())?;
        }
        Some(Commands::Watch) => watch(settings, input, out)?,
        None if cli.hashes.is_empty() => {
            let mut text = String::new();
            input.read_to_string(&mut text)?;
            classify_all(settings, std::iter::once(strip_newline(&text)), out)?;
        }
        None => classify_all(settings, cli.hashes.iter().map(String::as_str), out)?,
    }
    out.flush()?;
    Ok(())
}

fn classify_all<'a, W: Write>(
    settings: Settings,
    inputs: impl Iterator<Item = &'a str>,
    out: &mut W,
) -> Result<()> {
    let renderer = settings.renderer();
    let mut presenter = Presenter::new();
    for (i, text) in inputs.enumerate() {
        presenter.set_input(text);
        if settings.json {
            out.write_all(renderer.render_json(&presenter.view())?.as_bytes())?;
        } else {
            if i > 0 {
                writeln!(out)?;
            }
            out.write_all(renderer.render(&presenter.view()).as_bytes())?;
        }
    }
    Ok(())
}

fn watch<R: BufRead, W: Write>(settings: Settings, input: R, out: &mut W) -> Result<()> {
    let renderer = settings.renderer();
    let mut presenter = Presenter::new();
    if !settings.json {
        out.write_all(renderer.render(&presenter.view()).as_bytes())?;
    }
    for line in input.lines() {
        presenter.set_input(line?);
        let rendered = if settings.json {
            renderer.render_json(&presenter.view())?
        } else {
            renderer.render(&presenter.view())
        };
        out.write_all(rendered.as_bytes())?;
        if !settings.json {
            writeln!(out)?;
        }
        out.flush()?;
    }
    Ok(())
}

fn strip_newline(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text)
}
