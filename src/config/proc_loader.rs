use std::path::Path;

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use tracing::{debug, error};

use crate::config::proc_validator;
use crate::config::settings::{LoggingConfig, ServiceConfig};

/// Load and validate config from YAML file
pub async fn file_to_config(path: &Path) -> Result<ServiceConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading config file {}", path.display()))?;

    let expanded = expand_env_vars(&content)?;
    parse_config(expanded)
}

pub fn parse_config(content: String) -> Result<ServiceConfig> {
    let mut service_config: ServiceConfig = serde_yaml::from_str(&content)
        .inspect_err(|e| error!("parse config error: {}", e))?;

    // Apply defaults
    if service_config.logging.is_none() {
        service_config.logging = Some(LoggingConfig::default());
    }
    service_config.controller.base_url = service_config
        .controller
        .base_url
        .trim_end_matches('/')
        .to_owned();

    debug!("validation config ...");
    proc_validator::validate_service_config(&service_config)
        .map_err(|errors| anyhow!("invalid config: {}", errors.join("; ")))?;

    Ok(service_config)
}

/// Replace `${VAR}` and `${VAR:default}` with values from the environment.
fn expand_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}")?;
    let expanded = re.replace_all(input, |caps: &regex::Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    });
    Ok(expanded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::LogFormat;
    use serial_test::serial;
    use std::io::Write;

    const CONFIG: &str = r#"
controller:
  base_url: https://omada.local:8043/
  omadac_id: "${OMADA_TEST_CID}"
  client_id: "${OMADA_TEST_CLIENT_ID:fallback-id}"
  client_secret: secret
  disable_cert_verification: true
logging:
  level: debug
  format: json
"#;

    #[tokio::test]
    #[serial]
    async fn loads_file_with_env_expansion() -> Result<()> {
        std::env::set_var("OMADA_TEST_CID", "cid-from-env");
        std::env::remove_var("OMADA_TEST_CLIENT_ID");

        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(CONFIG.as_bytes())?;

        let cfg = file_to_config(file.path()).await?;
        assert_eq!(cfg.controller.base_url, "https://omada.local:8043");
        assert_eq!(cfg.controller.omadac_id, "cid-from-env");
        assert_eq!(cfg.controller.client_id, "fallback-id");
        assert!(cfg.controller.disable_cert_verification);
        assert_eq!(cfg.controller.page_size, 100);
        assert_eq!(cfg.controller.timeout_ms, 5000);

        let logging = cfg.logging.unwrap();
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, LogFormat::Json);

        std::env::remove_var("OMADA_TEST_CID");
        Ok(())
    }

    #[test]
    #[serial]
    fn missing_env_var_fails_validation() {
        std::env::remove_var("OMADA_TEST_CID");

        let err = parse_config(expand_env_vars(CONFIG).unwrap()).unwrap_err();
        assert!(err.to_string().contains("controller.omadac_id: must not be empty"), "{}", err);
    }

    #[test]
    fn logging_defaults_when_absent() {
        let cfg = parse_config(
            "controller:\n  base_url: http://10.0.0.2:8088\n  omadac_id: cid\n  client_id: id\n  client_secret: secret\n  page_size: 20\n"
                .to_owned(),
        )
        .unwrap();

        assert_eq!(cfg.controller.page_size, 20);
        assert_eq!(cfg.logging.unwrap().level, "info");
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let err = file_to_config(Path::new("/definitely/not/here.yaml")).await.unwrap_err();
        assert!(err.to_string().contains("reading config file"));
    }
}
