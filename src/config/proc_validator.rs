//! Configuration validation with aggregated errors.
//! Every issue found is collected so a broken config file is reported in one go.

use reqwest::Url;
use tracing::error;

use crate::config::settings::{ControllerConfig, LoggingConfig, ServiceConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_controller(&cfg.controller, &mut errors);
    if let Some(logging) = &cfg.logging {
        validate_logging(logging, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for e in &errors {
            error!("config validation: {}", e);
        }
        Err(errors)
    }
}

fn validate_controller(cfg: &ControllerConfig, errors: &mut Vec<String>) {
    match Url::parse(&cfg.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(format!(
            "controller.base_url: unsupported scheme '{}'",
            url.scheme()
        )),
        Err(e) => errors.push(format!(
            "controller.base_url: '{}' is not a valid url: {}",
            cfg.base_url, e
        )),
    }

    for (field, value) in [
        ("omadac_id", &cfg.omadac_id),
        ("client_id", &cfg.client_id),
        ("client_secret", &cfg.client_secret),
    ] {
        if value.trim().is_empty() {
            errors.push(format!("controller.{}: must not be empty", field));
        }
    }

    if cfg.page_size == 0 {
        errors.push("controller.page_size: must be greater than 0".to_string());
    }
    if cfg.timeout_ms == 0 {
        errors.push("controller.timeout_ms: must be greater than 0".to_string());
    }
}

fn validate_logging(cfg: &LoggingConfig, errors: &mut Vec<String>) {
    if !LOG_LEVELS.contains(&cfg.level.to_lowercase().as_str()) {
        errors.push(format!(
            "logging.level: '{}' is not one of {:?}",
            cfg.level, LOG_LEVELS
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::LogFormat;

    fn valid() -> ServiceConfig {
        ServiceConfig {
            controller: ControllerConfig::new("https://omada.local:8043", "cid", "id", "secret"),
            logging: Some(LoggingConfig::new("debug".to_owned(), LogFormat::Json)),
        }
    }

    #[test]
    fn accepts_valid_config() {
        assert!(validate_service_config(&valid()).is_ok());
    }

    #[test]
    fn aggregates_all_issues() {
        let mut cfg = valid();
        cfg.controller.base_url = "omada.local".to_owned();
        cfg.controller.client_id = " ".to_owned();
        cfg.controller.client_secret = String::new();
        cfg.controller.page_size = 0;
        cfg.logging = Some(LoggingConfig::new("verbose".to_owned(), LogFormat::Compact));

        let errors = validate_service_config(&cfg).unwrap_err();
        assert_eq!(errors.len(), 5, "{:?}", errors);
        assert!(errors.iter().any(|e| e.starts_with("controller.base_url")));
        assert!(errors.iter().any(|e| e.starts_with("controller.client_id")));
        assert!(errors.iter().any(|e| e.starts_with("controller.client_secret")));
        assert!(errors.iter().any(|e| e.starts_with("controller.page_size")));
        assert!(errors.iter().any(|e| e.starts_with("logging.level")));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut cfg = valid();
        cfg.controller.base_url = "ftp://omada.local".to_owned();
        let errors = validate_service_config(&cfg).unwrap_err();
        assert_eq!(errors, vec!["controller.base_url: unsupported scheme 'ftp'".to_string()]);
    }
}
