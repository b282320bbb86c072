use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use flow_card_editor::config::EditorSettings;
use flow_card_editor::schema::{individual_schema, visible_field_paths};
use flow_card_editor::{check_schema, Translations, ValueMap};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

/// flow-card-editor - Visual editor schema tooling for power flow cards
#[derive(Parser, Debug)]
#[command(name = "flow-card-editor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0", global = true)]
    debug: u8,

    /// Language for group titles (overrides the saved setting, e.g. de or de-DE)
    #[arg(short = 'l', long = "lang", value_name = "LANG", global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the individual entity editor schema as JSON
    Schema {
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },
    /// List the fields drawn for a card configuration, in render order
    Visible {
        /// Individual entry configuration (YAML or JSON)
        #[arg(value_name = "CONFIG_FILE")]
        config: PathBuf,
    },
    /// Run authoring checks on the built-in schema
    Check,
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting flow-card-editor v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("error: {:#}", e);
            std::process::exit(2);
        }
    }
}

/// Returns `Ok(false)` when the command completed but found problems
fn run(cli: Cli) -> Result<bool> {
    let settings = EditorSettings::load().unwrap_or_else(|e| {
        warn!("Failed to load editor settings, using defaults: {:#}", e);
        EditorSettings::default()
    });

    let translations = Translations::new(cli.lang.as_deref().unwrap_or(&settings.language));
    if !translations.is_supported() {
        warn!(
            "No translations for '{}', falling back to English (available: {})",
            translations.language(),
            Translations::available_languages().join(", ")
        );
    }
    let schema = individual_schema(&translations);

    match cli.command {
        Command::Schema { compact } => {
            let json = if compact || !settings.pretty {
                serde_json::to_string(&schema)?
            } else {
                serde_json::to_string_pretty(&schema)?
            };
            println!("{}", json);
            Ok(true)
        }
        Command::Visible { config } => {
            let values = load_values(&config)?;
            for path in visible_field_paths(&schema, &values) {
                println!("{}", path);
            }
            Ok(true)
        }
        Command::Check => {
            let errors = check_schema(&schema);
            for e in &errors {
                println!("{}", e);
            }
            if errors.is_empty() {
                println!("Schema OK ({} top-level entries)", schema.len());
            }
            Ok(errors.is_empty())
        }
    }
}

/// Read a card configuration object. JSON parses as YAML too.
fn load_values(path: &Path) -> Result<ValueMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    let value: serde_json::Value = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse {:?}", path))?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        serde_json::Value::Null => Ok(ValueMap::new()),
        other => bail!("Expected a mapping in {:?}, found {}", path, other),
    }
}
