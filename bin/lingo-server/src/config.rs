//! Server configuration, loaded from environment variables at startup.

use std::str::FromStr;

use strum::{Display, EnumString};

/// Which [`lingo_app_core::IdentityProvider`] resolves callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AuthMode {
    /// Trust an identity header set by an upstream auth proxy.
    Header,
    /// Map `Authorization: Bearer` tokens to owners.
    Token,
}

/// Runtime configuration for lingo-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// sqlx database URL (default: `"sqlite://lingo.db?mode=rwc"`).
    /// `"memory"` selects the in-process store; nothing survives a restart.
    pub database_url: String,

    /// Connection pool size.
    pub database_max_connections: u32,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated CORS allow-list; `None` allows any origin.
    pub cors_allowed_origins: Option<String>,

    /// Serve Swagger UI and the OpenAPI document.
    pub enable_swagger: bool,

    pub auth_mode: AuthMode,

    /// Header read in [`AuthMode::Header`].
    pub identity_header: String,

    /// `token:owner,token:owner` pairs for [`AuthMode::Token`].
    pub api_tokens: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());
        Self {
            bind_address: env_or("LINGO_BIND", "0.0.0.0:3000"),
            database_url: env_or("LINGO_DATABASE_URL", "sqlite://lingo.db?mode=rwc"),
            database_max_connections: parse_or(lookup("LINGO_DATABASE_MAX_CONNECTIONS"), 5),
            log_level: env_or("LINGO_LOG", "info"),
            log_json: lookup("LINGO_LOG_JSON").map(|v| is_truthy(&v)).unwrap_or(false),
            cors_allowed_origins: lookup("LINGO_CORS_ORIGINS").filter(|v| !v.trim().is_empty()),
            enable_swagger: lookup("LINGO_ENABLE_SWAGGER").map(|v| is_truthy(&v)).unwrap_or(true),
            auth_mode: match lookup("LINGO_AUTH_MODE") {
                None => AuthMode::Header,
                Some(raw) => AuthMode::from_str(raw.trim()).unwrap_or_else(|_| {
                    eprintln!("WARN: LINGO_AUTH_MODE='{raw}' is not 'header' or 'token'; using 'header'");
                    AuthMode::Header
                }),
            },
            identity_header: env_or("LINGO_IDENTITY_HEADER", "x-user-id"),
            api_tokens: env_or("LINGO_API_TOKENS", ""),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn is_truthy(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true")
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.bind_address, "0.0.0.0:3000");
        assert_eq!(cfg.database_url, "sqlite://lingo.db?mode=rwc");
        assert_eq!(cfg.database_max_connections, 5);
        assert!(!cfg.log_json);
        assert!(cfg.enable_swagger);
        assert!(cfg.cors_allowed_origins.is_none());
        assert_eq!(cfg.auth_mode, AuthMode::Header);
        assert_eq!(cfg.identity_header, "x-user-id");
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            ("LINGO_BIND", "127.0.0.1:8080"),
            ("LINGO_DATABASE_MAX_CONNECTIONS", "12"),
            ("LINGO_LOG_JSON", "TRUE"),
            ("LINGO_ENABLE_SWAGGER", "false"),
            ("LINGO_AUTH_MODE", "Token"),
            ("LINGO_API_TOKENS", "t:u1"),
            ("LINGO_CORS_ORIGINS", "https://a.example"),
        ]);
        assert_eq!(cfg.bind_address, "127.0.0.1:8080");
        assert_eq!(cfg.database_max_connections, 12);
        assert!(cfg.log_json);
        assert!(!cfg.enable_swagger);
        assert_eq!(cfg.auth_mode, AuthMode::Token);
        assert_eq!(cfg.api_tokens, "t:u1");
        assert_eq!(cfg.cors_allowed_origins.as_deref(), Some("https://a.example"));
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = config(&[
            ("LINGO_DATABASE_MAX_CONNECTIONS", "lots"),
            ("LINGO_AUTH_MODE", "oauth"),
            ("LINGO_CORS_ORIGINS", "  "),
        ]);
        assert_eq!(cfg.database_max_connections, 5);
        assert_eq!(cfg.auth_mode, AuthMode::Header);
        assert!(cfg.cors_allowed_origins.is_none());
    }
}
