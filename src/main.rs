use anyhow::Result;
use clap::Parser;
use std::io::Read;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use translate_panel::config::Config;
use translate_panel::languages;
use translate_panel::translate::TranslationClientFactory;
use translate_panel::ui::TerminalSurface;
use translate_panel::{TranslateError, TranslationRequestController};

/// Translate text through a remote /translate endpoint
#[derive(Parser, Debug)]
#[command(name = "translate-panel", version)]
struct Args {
    /// Text to translate; read from stdin when omitted
    text: Option<String>,

    /// Target language code (ur, en, fr, ar)
    #[arg(short, long)]
    target: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, env = "CONFIG_PATH")]
    config: Option<String>,

    /// Override the translation server base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("translate_panel=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.client_config.base_url = base_url;
    }

    let target = args
        .target
        .unwrap_or_else(|| config.ui_config.default_target_lang.clone());
    if !languages::is_supported(&target) {
        let supported: Vec<_> = languages::supported_codes().collect();
        return Err(anyhow::anyhow!(
            "{} (supported: {})",
            TranslateError::UnsupportedLanguage(target),
            supported.join(", ")
        ));
    }

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let client = TranslationClientFactory::create_client(&config.client_config)?;
    let surface = TerminalSurface::new(std::io::stdout(), config.ui_config.color);
    let mut controller = TranslationRequestController::new(surface, client)
        .with_rtl_font(config.ui_config.rtl_font.clone());

    let result = controller.submit(&text, &target).await;
    controller.surface().render();

    match result {
        Ok(outcome) => {
            debug!("Translation finished: detected={}", outcome.detected_language);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            debug!("Translation finished with error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Explicit path first, then the usual file names, then built-in defaults.
fn load_config(explicit: Option<&str>) -> Result<Config> {
    if let Some(path) = explicit {
        let config = Config::load(path)?;
        info!("Loaded configuration from: {}", path);
        return Ok(config);
    }

    for path in ["translate-panel.yaml", "translate-panel.yml", "translate-panel.json"] {
        match Config::load(path) {
            Ok(config) => {
                info!("Loaded configuration from: {}", path);
                return Ok(config);
            }
            Err(e) => {
                debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    info!("No configuration file found, using defaults");
    Ok(Config::default())
}
