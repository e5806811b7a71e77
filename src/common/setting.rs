//! setting config file
//! - `ENV` selects `config_<env>.toml`, default `dev`
//! - loaded once in main and passed down, there is no global settings cache

use std::{fs::File, io::Read};
use serde::Deserialize;
use std::env;
use super::error::SettingError;

pub const DEFAULT_DEVICE_PORT: u16 = 60000;

#[derive(Debug, Deserialize)]
pub struct Env {
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_env")]
    pub env: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    // write log to this file instead of stdout
    #[serde(default)]
    pub log_file: Option<String>,
}

/// the signal tower to talk to
#[derive(Debug, Deserialize)]
pub struct Device {
    pub address: String,
    #[serde(default = "default_device_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Web {
    #[serde(default = "default_web_host")]
    pub web_host: String,
    #[serde(default = "default_web_port")]
    pub web_port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub env: Env,
    pub device: Device,
    #[serde(default)]
    pub web: Web,
}

impl Default for Env {
    fn default() -> Self {
        Env {
            debug: false,
            env: default_env(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Default for Web {
    fn default() -> Self {
        Web {
            web_host: default_web_host(),
            web_port: default_web_port(),
        }
    }
}

fn default_env() -> String {
    String::from("dev")
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_device_port() -> u16 {
    DEFAULT_DEVICE_PORT
}

fn default_web_host() -> String {
    String::from("127.0.0.1")
}

fn default_web_port() -> u16 {
    8080
}

impl Settings {
    /// read `config_<ENV>.toml` from the working directory
    pub fn load() -> Result<Self, SettingError> {
        let env = match env::var("ENV") {
            Ok(e) => e,
            Err(_) => {
                log::warn!("no ENV set, use default: 'dev'");
                default_env()
            }
        };
        Self::load_file(format!("config_{}.toml", env).as_str())
    }

    pub fn load_file(file_path: &str) -> Result<Self, SettingError> {
        let mut str_val = String::new();
        File::open(file_path)
            .and_then(|mut file| file.read_to_string(&mut str_val))
            .map_err(|source| SettingError::Read { path: file_path.to_string(), source })?;
        Self::parse(&str_val)
    }

    pub fn parse(str_val: &str) -> Result<Self, SettingError> {
        Ok(toml::from_str(str_val)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let settings = Settings::parse(
            r#"
            [env]
            debug = true
            env = "prod"
            log_level = "debug"
            log_file = "error.log"

            [device]
            address = "192.168.10.1"
            port = 10000

            [web]
            web_host = "0.0.0.0"
            web_port = 9000
            "#,
        )
        .unwrap();
        assert!(settings.env.debug);
        assert_eq!(settings.env.log_file.as_deref(), Some("error.log"));
        assert_eq!(settings.device.address, "192.168.10.1");
        assert_eq!(settings.device.port, 10000);
        assert_eq!(settings.web.web_port, 9000);
    }

    #[test]
    fn test_parse_defaults() {
        let settings = Settings::parse("[device]\naddress = \"10.0.0.2\"\n").unwrap();
        assert_eq!(settings.device.port, DEFAULT_DEVICE_PORT);
        assert_eq!(settings.env.log_level, "info");
        assert_eq!(settings.web.web_host, "127.0.0.1");
        assert_eq!(settings.web.web_port, 8080);
    }

    #[test]
    fn test_missing_device_section() {
        assert!(matches!(Settings::parse("[env]\ndebug = false\n"), Err(SettingError::Format(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::load_file("no_such_config.toml");
        assert!(matches!(result, Err(SettingError::Read { .. })));
    }
}
