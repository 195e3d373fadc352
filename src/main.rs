//! PatternKit headless driver
//!
//! Replays a pointer-event script against a fresh pattern and prints the
//! resulting state as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use patternkit_designer::tool_catalog;
use patternkit::{init_logging, Config, Script, Session, BUILD_DATE, VERSION};

#[derive(Parser)]
#[command(name = "patternkit")]
#[command(about = "Replay pattern drafting scripts", long_about = None)]
struct Cli {
    /// JSON script of tool steps and pointer events
    script: Option<PathBuf>,

    /// Config file (.json or .toml); the platform default when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also rasterise the final pattern to this PNG file
    #[arg(long)]
    png: Option<PathBuf>,

    /// Fit the PNG view to the pattern instead of using the script view
    #[arg(long, requires = "png")]
    fit: bool,

    /// Print the tool catalog instead of running a script
    #[arg(long)]
    list_tools: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(&path)
            .with_context(|| format!("loading {}", path.display()));
    }
    match Config::default_config_path() {
        Ok(path) => Ok(Config::load_or_default(&path)?),
        Err(err) => {
            tracing::warn!("{}, using defaults", err);
            Ok(Config::default())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs)?;
    tracing::info!(version = VERSION, build_date = BUILD_DATE, "patternkit starting");

    let config = load_config(cli.config)?;

    if cli.list_tools {
        for entry in tool_catalog(config.editor.measurement_system) {
            println!("{:<10} {:<12} {}", entry.code, entry.id, entry.label);
        }
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        anyhow::bail!("no script given (pass a script path or --list-tools)");
    };
    let text = std::fs::read_to_string(&script_path)
        .with_context(|| format!("reading {}", script_path.display()))?;
    let script = Script::from_json(&text).context("parsing script")?;

    let mut session = Session::new(&config);
    session.play(&script);

    if let Some(png) = cli.png {
        if cli.fit {
            session.fit_view();
        }
        session
            .render()
            .save(&png)
            .with_context(|| format!("writing {}", png.display()))?;
    }

    println!("{}", serde_json::to_string_pretty(session.state())?);
    Ok(())
}
