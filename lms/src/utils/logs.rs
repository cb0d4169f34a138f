use std::str::FromStr;
use tracing::Level;
use crate::core::domain::Configuration;

// falls back to WARN so that an unknown level does not flood the console
pub(crate) fn log_level(config: &Configuration) -> Level {
    Level::from_str(config.log_level.trim()).unwrap_or(Level::WARN)
}

pub(crate) fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(log_level(config))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // stdout carries the console transcript, diagnostics go to stderr.
        .with_writer(std::io::stderr);
    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests {
    use tracing::Level;
    use crate::core::domain::Configuration;
    use crate::utils::logs::log_level;

    #[test]
    fn test_should_parse_log_level() {
        let mut config = Configuration::new("test");
        config.log_level = "debug".to_string();
        assert_eq!(Level::DEBUG, log_level(&config));
        config.log_level = " INFO ".to_string();
        assert_eq!(Level::INFO, log_level(&config));
    }

    #[test]
    fn test_should_default_unknown_log_level() {
        let mut config = Configuration::new("test");
        config.log_level = "chatty".to_string();
        assert_eq!(Level::WARN, log_level(&config));
    }
}
