use anyhow::{Context, Result};
use clap::Parser;
use snake_arcade::game::GameConfig;
use snake_arcade::modes::HumanMode;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Continuous-movement Snake in the terminal")]
struct Cli {
    /// JSON config file; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in board units
    #[arg(long)]
    width: Option<u32>,

    /// Board height in board units
    #[arg(long)]
    height: Option<u32>,

    /// Distance the snake travels per tick
    #[arg(long)]
    step: Option<f64>,

    /// Milliseconds between ticks
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.display_width = width;
        }
        if let Some(height) = self.height {
            config.display_height = height;
        }
        if let Some(step) = self.step {
            config.step_distance = step;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.update_delay_ms = delay_ms;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

/// The terminal belongs to the game, so logs only go to a file when asked for
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let config = cli.game_config()?;
    tracing::info!(
        width = config.display_width,
        height = config.display_height,
        step = config.step_distance,
        delay_ms = config.update_delay_ms,
        "starting game"
    );

    let mut human_mode = HumanMode::new(&config)?;
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        file
    }

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["snake_arcade"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_without_arguments() {
        let config = parse(&[]).game_config().unwrap();
        assert_eq!(config.display_width, 600);
        assert_eq!(config.update_delay_ms, 50);
    }

    #[test]
    fn test_flags_override_file() {
        let file = config_file(r#"{ "display_width": 500, "display_height": 400, "step_distance": 3.0 }"#);
        let path = file.path().to_str().unwrap();

        let config = parse(&["--config", path, "--width", "800", "--delay-ms", "20"])
            .game_config()
            .unwrap();

        assert_eq!(config.display_width, 800);
        assert_eq!(config.display_height, 400);
        assert_eq!(config.step_distance, 3.0);
        assert_eq!(config.update_delay_ms, 20);
    }

    #[test]
    fn test_validation_runs_after_overrides() {
        // The file alone is invalid, the flag repairs it
        let file = config_file(r#"{ "display_width": 0 }"#);
        let path = file.path().to_str().unwrap();
        assert!(parse(&["--config", path]).game_config().is_err());
        assert!(parse(&["--config", path, "--width", "600"]).game_config().is_ok());

        // A valid file broken by a flag is still rejected
        let file = config_file(r#"{ "display_height": 600 }"#);
        let path = file.path().to_str().unwrap();
        assert!(parse(&["--config", path, "--step", "0"]).game_config().is_err());
    }
}
