// src/config/options.rs
//
// Options are layered, highest wins:
//   CLI flags > URFU_SCHEDULE_* env > config.toml > consts.rs defaults
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub net: NetOptions,
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetOptions {
    /// Schedule API root, without trailing slash
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout_secs: TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    pub workers: usize,
    pub pause_ms: u64,
    pub jitter_ms: u64,
    /// How far from today (in days) a date may be requested
    pub window_days: i64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            workers: WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
            jitter_ms: JITTER_MS,
            window_days: DATE_WINDOW_DAYS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Text,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Text | ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl AppOptions {
    /// `<config_dir>/urfu_schedule/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default location. A missing default file means defaults;
    /// a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => match Self::default_config_path() {
                Some(p) if p.exists() => Self::load_from_file(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Apply URFU_SCHEDULE_BASE_URL / URFU_SCHEDULE_TIMEOUT.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = var(ENV_BASE_URL) {
            self.net.base_url = url;
        }
        if let Some(t) = var(ENV_TIMEOUT) {
            self.net.timeout_secs = t
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("{ENV_TIMEOUT}={t:?} is not a number of seconds")))?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&mut self) -> Result<()> {
        let trimmed = self.net.base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::Config(s!("net.base_url is empty")));
        }
        self.net.base_url = s!(trimmed);
        if self.fetch.workers == 0 {
            return Err(Error::Config(s!("fetch.workers must be at least 1")));
        }
        if self.fetch.window_days < 0 {
            return Err(Error::Config(s!("fetch.window_days must not be negative")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_consts() {
        let o = AppOptions::default();
        assert_eq!(o.net.base_url, BASE_URL);
        assert_eq!(o.fetch.workers, WORKERS);
        assert_eq!(o.fetch.window_days, 7);
        assert_eq!(o.export.format, ExportFormat::Text);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml = r#"
[net]
timeout_secs = 30

[export]
format = "tsv"
include_headers = true
"#;
        let o: AppOptions = toml::from_str(toml).unwrap();
        assert_eq!(o.net.timeout_secs, 30);
        assert_eq!(o.net.base_url, BASE_URL);
        assert_eq!(o.export.format, ExportFormat::Tsv);
        assert!(o.export.include_headers);
        assert_eq!(o.fetch, FetchOptions::default());
    }

    #[test]
    fn env_overrides_apply_and_trim_slash() {
        let o = AppOptions::default()
            .with_overrides_from(|k| match k {
                ENV_BASE_URL => Some(s!("http://localhost:8080/api/")),
                ENV_TIMEOUT => Some(s!("3")),
                _ => None,
            })
            .unwrap();
        assert_eq!(o.net.base_url, "http://localhost:8080/api");
        assert_eq!(o.net.timeout_secs, 3);
    }

    #[test]
    fn bad_timeout_is_config_error() {
        let err = AppOptions::default()
            .with_overrides_from(|k| (k == ENV_TIMEOUT).then(|| s!("soon")))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn zero_workers_rejected() {
        let mut o = AppOptions::default();
        o.fetch.workers = 0;
        assert!(o.with_overrides_from(|_| None).is_err());
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[fetch]\nworkers = 2\n").unwrap();
        let o = AppOptions::load(Some(&path)).unwrap();
        assert_eq!(o.fetch.workers, 2);

        let missing = dir.path().join("nope.toml");
        assert!(matches!(AppOptions::load(Some(&missing)), Err(Error::Io(_))));
    }

    #[test]
    fn delimiters() {
        assert_eq!(ExportFormat::Csv.delim(), Some(','));
        assert_eq!(ExportFormat::Tsv.delim(), Some('\t'));
        assert_eq!(ExportFormat::Json.delim(), None);
        assert_eq!(ExportFormat::Json.ext(), "json");
    }
}
