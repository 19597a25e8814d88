mod view;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::{Path, PathBuf},
};
use studyflow_config::Config;
use studyflow_format::{
    FormatMode, Formatter, RenderNode,
    render::{html::to_html, plain::to_plain_text},
};

#[derive(Parser)]
#[command(name = "studyflow-format")]
#[command(about = "Format StudyFlow markup for the terminal, HTML or JSON")]
struct Cli {
    /// Input file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Parsing mode (overrides the config file)
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Output format (defaults to `tui` on a terminal, `text` otherwise)
    #[arg(short, long, value_enum)]
    output: Option<OutputArg>,

    /// Config file (defaults to ~/.config/studyflow/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the effective formatter settings back to the config file
    #[arg(long)]
    save_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Strict,
    Chat,
}

impl From<ModeArg> for FormatMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Strict => FormatMode::Strict,
            ModeArg::Chat => FormatMode::Chat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    Tui,
    Html,
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.formatter.mode = mode.into();
    }
    if cli.save_config {
        let path = cli.config.clone().unwrap_or_else(Config::config_path);
        config
            .save_to_path(&path)
            .with_context(|| format!("Failed to save config to {}", path.display()))?;
        log::info!("saved config to {}", path.display());
    }

    let (title, text) = read_input(cli.input.as_deref())?;
    let nodes = Formatter::new(config.formatter).format(&text);

    let output = cli.output.unwrap_or(if io::stdout().is_terminal() {
        OutputArg::Tui
    } else {
        OutputArg::Text
    });
    log::debug!("rendering {} nodes as {output:?}", nodes.len());

    match output {
        OutputArg::Tui => view::run(&title, &nodes)?,
        OutputArg::Html => println!("{}", standalone_html(&nodes, config.stylesheet.as_deref())),
        OutputArg::Json => println!("{}", serde_json::to_string_pretty(&nodes)?),
        OutputArg::Text => println!("{}", to_plain_text(&nodes)),
    }

    Ok(())
}

/// Returns a display title and the full input text.
fn read_input(input: Option<&Path>) -> Result<(String, String)> {
    match input {
        Some(path) if path != Path::new("-") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(("<stdin>".to_string(), text))
        }
    }
}

fn standalone_html(nodes: &[RenderNode], stylesheet: Option<&Path>) -> String {
    let body = to_html(nodes);
    match stylesheet {
        Some(css) => format!(
            "<link rel=\"stylesheet\" href=\"{}\" />\n{body}",
            html_escape::encode_double_quoted_attribute(&css.to_string_lossy())
        ),
        None => body,
    }
}
