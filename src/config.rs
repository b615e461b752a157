//! # Configuração da Aplicação
//!
//! Valores configuráveis reunidos em um único [`Config`], resolvido uma vez
//! na inicialização.
//!
//! ## Prioridade (primeira fonte com valor vence)
//!
//! ```text
//! 1. config.toml        [server] addr / assets / log
//!                       [chat]   history_limit / rules
//! 2. ambiente (.env)    ENFERMAGEM_ADDR, ENFERMAGEM_ASSETS,
//!                       ENFERMAGEM_HISTORY_LIMIT, ENFERMAGEM_RULES
//! 3. padrão             0.0.0.0:3000, assets, info, 50, sem regras extras
//! ```
//!
//! O filtro de log é a exceção: `RUST_LOG` vence `[server] log`, que vence
//! `info` (ver [`Config::log_directives`]).
//!
//! A ausência de `config.toml` não é erro. Um arquivo malformado é.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::chat::DEFAULT_HISTORY_LIMIT;
use crate::resolver::RuleSet;

/// Arquivo de configuração procurado no diretório de trabalho.
pub const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("falha ao ler {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} malformado: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("limite de histórico inválido: {0:?} (esperado inteiro > 0)")]
    InvalidHistoryLimit(String),
}

// ─── Formato do config.toml ──────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    chat: ChatSection,
}

#[derive(Debug, Default, Deserialize)]
struct ServerSection {
    addr: Option<String>,
    assets: Option<String>,
    log: Option<String>,
}

/// `history_limit` é lido como valor TOML qualquer para que `"abc"` ou `0`
/// virem [`ConfigError::InvalidHistoryLimit`] em vez de erro de tipo genérico.
#[derive(Debug, Default, Deserialize)]
struct ChatSection {
    history_limit: Option<toml::Value>,
    rules: Option<String>,
}

/// Configuração resolvida.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub history_limit: usize,
    /// `[server] log` ou `info`; usado quando `RUST_LOG` não está definido.
    pub log_filter: String,
    pub assets_dir: PathBuf,
    /// Arquivo TOML com regras contextuais extras.
    pub rules_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            rules_path: None,
        }
    }
}

impl Config {
    /// Carrega `.env`, lê `config.toml` (se existir) e aplica as prioridades.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let path = Path::new(CONFIG_FILE);
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::from_sources(contents.as_deref(), |key| std::env::var(key).ok())
    }

    /// Resolve a configuração a partir do conteúdo do arquivo e de uma
    /// função de leitura de variáveis de ambiente.
    pub fn from_sources<F>(file: Option<&str>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: FileConfig = match file {
            Some(source) => toml::from_str(source).map_err(|source| ConfigError::Parse {
                path: PathBuf::from(CONFIG_FILE),
                source,
            })?,
            None => FileConfig::default(),
        };

        let defaults = Config::default();

        let bind_addr = file
            .server
            .addr
            .or_else(|| env("ENFERMAGEM_ADDR"))
            .unwrap_or(defaults.bind_addr);

        let assets_dir = file
            .server
            .assets
            .or_else(|| env("ENFERMAGEM_ASSETS"))
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        let log_filter = file.server.log.unwrap_or(defaults.log_filter);

        let history_limit = match file.chat.history_limit {
            Some(value) => parse_history_limit(&value)?,
            None => match env("ENFERMAGEM_HISTORY_LIMIT") {
                Some(raw) => parse_history_limit(&toml::Value::String(raw))?,
                None => defaults.history_limit,
            },
        };

        let rules_path = file
            .chat
            .rules
            .or_else(|| env("ENFERMAGEM_RULES"))
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            history_limit,
            log_filter,
            assets_dir,
            rules_path,
        })
    }

    /// Diretivas do `EnvFilter`: `RUST_LOG` se definido e não vazio, senão
    /// o filtro da configuração.
    pub fn log_directives<'a>(&'a self, rust_log: Option<&'a str>) -> &'a str {
        rust_log
            .map(str::trim)
            .filter(|directives| !directives.is_empty())
            .unwrap_or(self.log_filter.as_str())
    }

    /// Regras embutidas seguidas das regras do arquivo configurado.
    pub fn load_rules(&self) -> Result<RuleSet, ConfigError> {
        let mut rules = RuleSet::builtin();
        let Some(path) = &self.rules_path else {
            return Ok(rules);
        };

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let extra = RuleSet::from_toml_str(&source).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), rules = extra.len(), "Regras extras carregadas");
        rules.extend(extra);
        Ok(rules)
    }
}

fn parse_history_limit(value: &toml::Value) -> Result<usize, ConfigError> {
    let parsed = match value {
        toml::Value::Integer(n) => usize::try_from(*n).ok(),
        toml::Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidHistoryLimit(match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_any_source() {
        let config = Config::from_sources(None, env_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.history_limit, 50);
    }

    #[test]
    fn env_overrides_defaults() {
        let env = env_from(&[
            ("ENFERMAGEM_ADDR", "127.0.0.1:8080"),
            ("ENFERMAGEM_HISTORY_LIMIT", "10"),
            ("ENFERMAGEM_RULES", "regras.toml"),
        ]);
        let config = Config::from_sources(None, env).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.rules_path, Some(PathBuf::from("regras.toml")));
    }

    #[test]
    fn rust_log_wins_over_file_log_filter() {
        let config = Config::from_sources(
            Some("[server]\nlog = \"warn\""),
            env_from(&[("RUST_LOG", "debug")]),
        )
        .unwrap();
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.log_directives(Some("debug")), "debug");
        assert_eq!(config.log_directives(Some("  ")), "warn");
        assert_eq!(config.log_directives(None), "warn");
        assert_eq!(Config::default().log_directives(None), "info");
    }

    #[test]
    fn file_wins_over_env() {
        let file = r#"
            [server]
            addr = "127.0.0.1:4000"
            assets = "public"

            [chat]
            history_limit = 20
        "#;
        let env = env_from(&[
            ("ENFERMAGEM_ADDR", "127.0.0.1:8080"),
            ("ENFERMAGEM_HISTORY_LIMIT", "10"),
        ]);
        let config = Config::from_sources(Some(file), env).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:4000");
        assert_eq!(config.assets_dir, PathBuf::from("public"));
        assert_eq!(config.history_limit, 20);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = Config::from_sources(Some("[server\naddr = "), env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn invalid_history_limits_are_rejected() {
        for raw in ["abc", "0", "-3"] {
            let err = Config::from_sources(None, env_from(&[("ENFERMAGEM_HISTORY_LIMIT", raw)]))
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidHistoryLimit(_)), "{raw}");
        }

        let err = Config::from_sources(Some("[chat]\nhistory_limit = 0"), env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHistoryLimit(_)));
    }

    #[test]
    fn without_rules_file_only_builtins_are_loaded() {
        let rules = Config::default().load_rules().unwrap();
        assert_eq!(rules.len(), RuleSet::builtin().len());
    }

    #[test]
    fn missing_rules_file_is_a_read_error() {
        let config = Config {
            rules_path: Some(PathBuf::from("/nao/existe/regras.toml")),
            ..Config::default()
        };
        assert!(matches!(config.load_rules(), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn rules_file_is_appended_after_builtins() {
        let path = std::env::temp_dir().join(format!("regras-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"
                [[rule]]
                name = "remedio-tosse"
                require = [["que remedio"], ["tosse"]]
                response = { text = "Xarope expectorante." }
            "#,
        )
        .unwrap();

        let config = Config {
            rules_path: Some(path.clone()),
            ..Config::default()
        };
        let rules = config.load_rules().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(rules.len(), RuleSet::builtin().len() + 1);
        assert_eq!(rules.iter().last().map(|r| r.name.as_str()), Some("remedio-tosse"));
    }
}
