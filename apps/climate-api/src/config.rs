//! # Climate API 設定
//!
//! 環境変数から Climate API サーバーの設定を読み込む。

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "sqlite://Resources/hawaii.sqlite";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 値を解釈できない
    #[error("{name} の値が不正です: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Climate API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// データストア接続 URL（`sqlite://<path>`）
    pub database_url: String,
    /// 接続プールの最大接続数
    pub database_max_connections: u32,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// すべての変数は省略可能で、未設定の場合はデフォルト値を使う。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("CLIMATE_PORT") {
            Some(value) => parse_number("CLIMATE_PORT", value)?,
            None => DEFAULT_PORT,
        };
        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => parse_number("DATABASE_MAX_CONNECTIONS", value)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if database_max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                name:  "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            host: lookup("CLIMATE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections,
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_未設定の場合デフォルト値を使う() {
        assert_eq!(
            load(&[]).unwrap(),
            ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                database_url: "sqlite://Resources/hawaii.sqlite".to_string(),
                database_max_connections: 5,
            }
        );
    }

    #[test]
    fn test_環境変数の値で上書きされる() {
        let config = load(&[
            ("CLIMATE_HOST", "0.0.0.0"),
            ("CLIMATE_PORT", "8080"),
            ("DATABASE_URL", "sqlite:///data/hawaii.sqlite"),
            ("DATABASE_MAX_CONNECTIONS", "10"),
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite:///data/hawaii.sqlite");
        assert_eq!(config.database_max_connections, 10);
    }

    #[test]
    fn test_ポート番号が不正な場合invalid_valueを返す() {
        assert_eq!(
            load(&[("CLIMATE_PORT", "http")]),
            Err(ConfigError::InvalidValue {
                name:  "CLIMATE_PORT",
                value: "http".to_string(),
            })
        );
    }

    #[test]
    fn test_最大接続数が0の場合invalid_valueを返す() {
        assert!(matches!(
            load(&[("DATABASE_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::InvalidValue {
                name: "DATABASE_MAX_CONNECTIONS",
                ..
            })
        ));
    }
}
