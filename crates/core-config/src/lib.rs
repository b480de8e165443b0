//! Configuration loading and parsing.
//!
//! `diagmon.toml` is looked up in the working directory first, then under
//! the platform config dir. Unknown fields are ignored and a missing or
//! unparsable file falls back to defaults, so the monitor always starts.
//!
//! Keys:
//! * `[pipe] path`: named pipe the build writes into.
//! * `[refresh] interval_secs, auto`: redraw cadence and whether the tick
//!   redraws at all.
//! * `[retention] max_errors, max_others`: per-queue caps, `0` unlimited.

use anyhow::Result;
use core_collections::DEFAULT_MAX_NODES;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::warn;

#[derive(Debug, Deserialize, Clone)]
pub struct PipeConfig {
    #[serde(default = "PipeConfig::default_path")]
    pub path: PathBuf,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl PipeConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("/tmp/diagmon")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshConfig {
    #[serde(default = "RefreshConfig::default_interval_secs")]
    pub interval_secs: u64,
    #[serde(default = "RefreshConfig::default_auto")]
    pub auto: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: Self::default_interval_secs(),
            auto: Self::default_auto(),
        }
    }
}

impl RefreshConfig {
    const fn default_interval_secs() -> u64 {
        1
    }
    const fn default_auto() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetentionConfig {
    /// Cap on retained error records; `0` means unlimited.
    #[serde(default = "RetentionConfig::default_cap")]
    pub max_errors: usize,
    /// Cap on retained warning/note records; `0` means unlimited.
    #[serde(default = "RetentionConfig::default_cap")]
    pub max_others: usize,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            max_errors: Self::default_cap(),
            max_others: Self::default_cap(),
        }
    }
}

impl RetentionConfig {
    const fn default_cap() -> usize {
        DEFAULT_MAX_NODES
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub pipe: PipeConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub retention: RetentionConfig,
}

#[derive(Debug, Default, Clone)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

/// Best-effort config path: working directory first, then the platform
/// config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("diagmon.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("diagmon").join("diagmon.toml");
    }
    PathBuf::from("diagmon.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => Ok(Config {
                raw: Some(content),
                file,
            }),
            Err(err) => {
                warn!(target: "config", file = %path.display(), %err, "config unparsable, using defaults");
                Ok(Config::default())
            }
        }
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_missing() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert_eq!(cfg.file.pipe.path, PathBuf::from("/tmp/diagmon"));
        assert_eq!(cfg.file.refresh.interval_secs, 1);
        assert!(cfg.file.refresh.auto);
        assert_eq!(cfg.file.retention.max_errors, DEFAULT_MAX_NODES);
    }

    #[test]
    fn parses_all_sections() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            tmp.path(),
            "[pipe]\npath = \"/run/build-diag\"\n\
             [refresh]\ninterval_secs = 3\nauto = false\n\
             [retention]\nmax_errors = 0\nmax_others = 256\n",
        )
        .unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.pipe.path, PathBuf::from("/run/build-diag"));
        assert_eq!(cfg.file.refresh.interval_secs, 3);
        assert!(!cfg.file.refresh.auto);
        assert_eq!(cfg.file.retention.max_errors, 0);
        assert_eq!(cfg.file.retention.max_others, 256);
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[refresh]\ninterval_secs = 5\n").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.refresh.interval_secs, 5);
        assert!(cfg.file.refresh.auto);
        assert_eq!(cfg.file.pipe.path, PathBuf::from("/tmp/diagmon"));
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "this is not toml = = =").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.refresh.interval_secs, 1);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "[pipe]\npath = \"/tmp/x\"\nfuture_knob = 1\n").unwrap();
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.pipe.path, PathBuf::from("/tmp/x"));
    }
}
