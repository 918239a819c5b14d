//! Accordion click simulator
//!
//! Loads an HTML page, binds its accordion headers and replays a sequence
//! of clicks, then prints the resulting panel states.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use accordion_toggle::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "accordion-sim", version, about = "Replay header clicks against an HTML accordion")]
struct Cli {
    /// HTML file to load, or `-` for stdin
    input: String,

    /// Header index to click (binding order); repeat for a sequence
    #[arg(short, long = "click")]
    clicks: Vec<usize>,

    /// JSON file with accordion settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Collapse other panels when one expands
    #[arg(long)]
    exclusive: bool,

    #[arg(long)]
    header_class: Option<String>,

    #[arg(long)]
    expanded_class: Option<String>,

    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let mut doc = load_document(&cli.input)?;
    let controller = AccordionController::initialize(&doc, config)
        .context("Failed to initialize accordion")?;
    log::info!("Bound {} header(s) from {}", controller.len(), cli.input);

    for &index in &cli.clicks {
        let outcome = controller
            .click(&mut doc, index)
            .with_context(|| format!("Click on header {} failed", index))?;
        log::info!("Click {} -> {:?}", index, outcome);
    }

    match cli.format {
        OutputFormat::Json => {
            let panels = controller.panels(&doc);
            println!("{}", serde_json::to_string_pretty(&panels)?);
        }
        OutputFormat::Table => print_table(&controller.panels(&doc)),
        OutputFormat::Html => println!("{}", doc.to_html()),
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<AccordionConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            AccordionConfig::from_json(&json)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => AccordionConfig::default(),
    };

    if cli.exclusive {
        config = config.with_exclusive(true);
    }
    if let Some(class) = &cli.header_class {
        config = config.with_header_class(class.as_str());
    }
    if let Some(class) = &cli.expanded_class {
        config = config.with_expanded_class(class.as_str());
    }
    Ok(config)
}

fn load_document(input: &str) -> Result<Fragment> {
    if input == "-" {
        let mut markup = String::new();
        std::io::stdin()
            .read_to_string(&mut markup)
            .context("Failed to read HTML from stdin")?;
        return Fragment::parse_html(&markup).context("Failed to parse HTML from stdin");
    }
    Fragment::load_html(input).with_context(|| format!("Failed to load {}", input))
}

fn print_table(panels: &[Panel]) {
    if panels.is_empty() {
        println!("No accordion headers found");
        return;
    }
    println!("{:<6} {:<10} {}", "INDEX", "STATE", "HEADER");
    for panel in panels {
        let state = panel
            .state
            .map(|s| s.to_string())
            .unwrap_or_else(|| "no-content".to_string());
        println!("{:<6} {:<10} {}", panel.index, state, panel.header);
    }
}
