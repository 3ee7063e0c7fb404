use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            service_port,
            service_host,
        })
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.socket_addr());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    // Tests in this module share process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
        }
        guard
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = lock_env();
        unsafe {
            env::set_var("SERVICE_PORT", "9090");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_port, 9090);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.socket_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = lock_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port() {
        let _guard = lock_env();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = lock_env();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());
    }
}
