use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

/// Running software version reported by the health check.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Catalog service configuration sourced from environment variables, with an
/// optional YAML override file.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    /// Store access key; surfaced only as a redacted fragment.
    pub store_key: String,
    /// Deployment/instance identifier, "unknown" when unset.
    pub instance_id: String,
}

#[derive(Debug, Deserialize)]
struct CatalogConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    store_key: Option<String>,
    instance_id: Option<String>,
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("CATALOG_BIND")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .with_context(|| "parse CATALOG_BIND")?;
        let metrics_bind = std::env::var("CATALOG_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:9090".to_string())
            .parse()
            .with_context(|| "parse CATALOG_METRICS_BIND")?;
        let store_key = std::env::var("CATALOG_STORE_KEY").unwrap_or_default();
        let instance_id =
            std::env::var("CATALOG_INSTANCE_ID").unwrap_or_else(|_| "unknown".to_string());
        Ok(Self {
            bind_addr,
            metrics_bind,
            store_key,
            instance_id,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("CATALOG_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read CATALOG_CONFIG: {path}"))?;
            let override_cfg: CatalogConfigOverride =
                serde_yaml::from_str(&contents).with_context(|| "parse catalog config yaml")?;
            if let Some(value) = override_cfg.bind_addr {
                config.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
            }
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
            if let Some(value) = override_cfg.store_key {
                config.store_key = value;
            }
            if let Some(value) = override_cfg.instance_id {
                config.instance_id = value;
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        key: &'static str,
        prev: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let prev = std::env::var(key).ok();
            unsafe {
                std::env::set_var(key, value);
            }
            Self { key, prev }
        }

        fn unset(key: &'static str) -> Self {
            let prev = std::env::var(key).ok();
            unsafe {
                std::env::remove_var(key);
            }
            Self { key, prev }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.prev {
                Some(value) => unsafe {
                    std::env::set_var(self.key, value);
                },
                None => unsafe {
                    std::env::remove_var(self.key);
                },
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_env_is_unset() {
        let _g1 = EnvGuard::unset("CATALOG_BIND");
        let _g2 = EnvGuard::unset("CATALOG_METRICS_BIND");
        let _g3 = EnvGuard::unset("CATALOG_STORE_KEY");
        let _g4 = EnvGuard::unset("CATALOG_INSTANCE_ID");

        let config = CatalogConfig::from_env().expect("config");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.metrics_bind.port(), 9090);
        assert_eq!(config.store_key, "");
        assert_eq!(config.instance_id, "unknown");
    }

    #[test]
    #[serial]
    fn env_values_override_defaults() {
        let _g1 = EnvGuard::set("CATALOG_BIND", "127.0.0.1:18080");
        let _g2 = EnvGuard::set("CATALOG_STORE_KEY", "abcdef0123");
        let _g3 = EnvGuard::set("CATALOG_INSTANCE_ID", "inst-7");

        let config = CatalogConfig::from_env().expect("config");
        assert_eq!(config.bind_addr.port(), 18080);
        assert_eq!(config.store_key, "abcdef0123");
        assert_eq!(config.instance_id, "inst-7");
    }

    #[test]
    #[serial]
    fn invalid_bind_addr_is_an_error() {
        let _g1 = EnvGuard::set("CATALOG_BIND", "not-an-addr");
        assert!(CatalogConfig::from_env().is_err());
    }

    #[test]
    #[serial]
    fn yaml_override_wins_over_env() {
        let dir = std::env::temp_dir().join("catalog-config-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("override.yaml");
        std::fs::write(&path, "instance_id: from-yaml\nstore_key: yamlkey\n")
            .expect("write override");

        let _g1 = EnvGuard::set("CATALOG_CONFIG", path.to_str().expect("path"));
        let _g2 = EnvGuard::set("CATALOG_INSTANCE_ID", "from-env");
        let _g3 = EnvGuard::unset("CATALOG_BIND");
        let _g4 = EnvGuard::unset("CATALOG_METRICS_BIND");

        let config = CatalogConfig::from_env_or_yaml().expect("config");
        assert_eq!(config.instance_id, "from-yaml");
        assert_eq!(config.store_key, "yamlkey");
        assert_eq!(config.bind_addr.port(), 8080);
    }
}
