//! Server configuration (command-line arguments and environment).

use axum::http::{HeaderValue, Method};
use clap::Parser;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origins allowed to call the HTTP API during local development.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5500", "http://127.0.0.1:5500"];

#[derive(Parser, Debug, Clone)]
#[command(name = "hiroba-server")]
#[command(about = "Room-based WebSocket chat server with presence and typing notifications", long_about = None)]
pub struct ServerConfig {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3500)]
    pub port: u16,

    /// Origin allowed to access the HTTP API (repeatable)
    #[arg(long = "allowed-origin", default_values_t = DEFAULT_ALLOWED_ORIGINS.map(String::from))]
    pub allowed_origins: Vec<String>,

    /// Disable cross-origin access entirely
    #[arg(long, env = "HIROBA_PRODUCTION")]
    pub production: bool,
}

impl ServerConfig {
    /// Address to bind, e.g. `127.0.0.1:3500`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// CORS layer for the configured origins, or `None` when cross-origin access is disabled
    pub fn cors_layer(&self) -> Option<CorsLayer> {
        if self.production {
            return None;
        }

        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring invalid allowed origin '{}': {}", origin, e);
                    None
                }
            })
            .collect();
        if origins.is_empty() {
            return None;
        }

        Some(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    fn declared_arg(id: &str) -> clap::Arg {
        ServerConfig::command()
            .get_arguments()
            .find(|arg| arg.get_id().as_str() == id)
            .cloned()
            .unwrap()
    }

    fn declared_defaults(id: &str) -> Vec<String> {
        declared_arg(id)
            .get_default_values()
            .iter()
            .map(|v| v.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_declared_defaults() {
        // テスト項目: 引数も環境変数もない場合のデフォルト値
        // given (前提条件):

        // when (操作):
        let host = declared_defaults("host");
        let port = declared_defaults("port");
        let origins = declared_defaults("allowed_origins");

        // then (期待する結果):
        assert_eq!(host, vec!["127.0.0.1"]);
        assert_eq!(port, vec!["3500"]);
        assert_eq!(origins, DEFAULT_ALLOWED_ORIGINS.to_vec());
        assert_eq!(
            declared_arg("port").get_env().map(|e| e.to_string_lossy().into_owned()),
            Some("PORT".to_string())
        );
        assert_eq!(
            declared_arg("production")
                .get_env()
                .map(|e| e.to_string_lossy().into_owned()),
            Some("HIROBA_PRODUCTION".to_string())
        );
    }

    #[test]
    fn test_development_config_allows_default_origins() {
        // テスト項目: production でなければデフォルトのオリジンに CORS が許可される
        // given (前提条件):
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3500,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.map(String::from).to_vec(),
            production: false,
        };

        // when (操作):
        let cors = config.cors_layer();

        // then (期待する結果):
        assert!(!config.production);
        assert!(cors.is_some());
        assert_eq!(config.bind_addr(), "127.0.0.1:3500");
    }

    #[test]
    fn test_invalid_origins_only_disable_cors() {
        // テスト項目: 有効なオリジンが 1 つもなければ CORS レイヤーを付けない
        // given (前提条件):
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3500,
            allowed_origins: vec!["bad\norigin".to_string()],
            production: false,
        };

        // when (操作):

        // then (期待する結果):
        assert!(config.cors_layer().is_none());
    }

    #[test]
    fn test_custom_host_port_and_origins() {
        // テスト項目: ホスト・ポート・許可オリジンを指定できる
        // given (前提条件):
        let args = [
            "hiroba-server",
            "-H",
            "0.0.0.0",
            "-p",
            "4000",
            "--allowed-origin",
            "https://chat.example.com",
        ];

        // when (操作):
        let config = ServerConfig::try_parse_from(args).unwrap();

        // then (期待する結果):
        assert_eq!(config.bind_addr(), "0.0.0.0:4000");
        assert_eq!(
            config.allowed_origins,
            vec!["https://chat.example.com".to_string()]
        );
    }

    #[test]
    fn test_production_disables_cors() {
        // テスト項目: production モードでは CORS レイヤーを付けない
        // given (前提条件):
        let args = ["hiroba-server", "--production"];

        // when (操作):
        let config = ServerConfig::try_parse_from(args).unwrap();

        // then (期待する結果):
        assert!(config.production);
        assert!(config.cors_layer().is_none());
    }
}
