mod cli;
mod commands;

use filmstrip_common::FilmstripError;
use filmstrip_config::FilmstripConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::Command;

const DEFAULT_LOG_DIRECTIVE: &str = "filmstrip=info";

/// CLI override first, then the config's `[logging]` level.
fn log_directive(cli_level: Option<&str>, config: Option<&FilmstripConfig>) -> String {
    match (cli_level, config) {
        (Some(level), _) => level.to_string(),
        (None, Some(config)) => format!("filmstrip={}", config.logging.level.as_directive()),
        (None, None) => DEFAULT_LOG_DIRECTIVE.to_string(),
    }
}

/// `init-config` must work even when the existing file is broken, and
/// `display-mode` has no tunables.
fn reads_config(command: &Command) -> bool {
    !matches!(command, Command::InitConfig { .. } | Command::DisplayMode(_))
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter.add_directive(LevelFilter::INFO.into()),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = cli::parse();

    let config = if reads_config(&args.command) {
        filmstrip_config::load_config(args.config.as_deref())
    } else {
        Ok(FilmstripConfig::default())
    };

    let directive = log_directive(args.log_level.as_deref(), config.as_ref().ok());
    init_logging(&directive);
    tracing::debug!("filmstrip v{} (log filter: {directive})", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    let result = config
        .map_err(FilmstripError::from)
        .and_then(|config| commands::run(&args.command, &config, args.config.as_deref()));

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmstrip_config::schema::LogLevel;

    #[test]
    fn cli_level_wins() {
        let config = FilmstripConfig::default();
        assert_eq!(log_directive(Some("debug"), Some(&config)), "debug");
    }

    #[test]
    fn config_level_used_without_cli_override() {
        let mut config = FilmstripConfig::default();
        config.logging.level = LogLevel::Warning;
        assert_eq!(log_directive(None, Some(&config)), "filmstrip=warn");
    }

    #[test]
    fn config_free_commands_skip_loading() {
        assert!(!reads_config(&Command::InitConfig {
            path: None,
            force: false
        }));
        assert!(!reads_config(&Command::DisplayMode(Default::default())));
        assert!(reads_config(&Command::Config));
        assert!(reads_config(&Command::Horizontal { height: 720.0 }));
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(log_directive(None, None), DEFAULT_LOG_DIRECTIVE);
    }
}
