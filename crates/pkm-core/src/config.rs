use crate::error::{PkmError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Environment variable names exposed to gather scripts
// ---------------------------------------------------------------------------

pub const ENV_SCRIPT_DIR: &str = "PKM_SCRIPT_DIR";
pub const ENV_DATA_DIR: &str = "PKM_DATA_DIR";
pub const ENV_DIR: &str = "PKM_DIR";
pub const ENV_GIT_ROOT: &str = "PKM_GIT_ROOT";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Persisted pkm configuration.
///
/// Only `workDir` and `gitRoot` are stored; the scripts and data directories
/// are derived from `workDir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding `scripts/` and `data/`.
    pub work_dir: PathBuf,
    /// Directory where local git clones are kept.
    pub git_root: PathBuf,
}

/// On-disk shape. Every key is optional so a partial file still overrides
/// whatever it does name.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    #[serde(default)]
    work_dir: Option<PathBuf>,
    #[serde(default)]
    git_root: Option<PathBuf>,
}

impl Config {
    pub fn new(work_dir: impl Into<PathBuf>, git_root: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            git_root: git_root.into(),
        }
    }

    pub fn with_defaults(home: &Path) -> Self {
        Self::new(paths::default_work_dir(home), paths::default_git_root(home))
    }

    /// Load the config from `explicit`, or from `~/.config/pkm/config.json`.
    ///
    /// Fails only when the home directory cannot be resolved.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let home = home::home_dir().ok_or(PkmError::HomeNotFound)?;
        let path = explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| paths::config_path(&home));
        Ok(Self::load_from(&path, &home))
    }

    /// Read the config at `path`, falling back to defaults rooted at `home`.
    ///
    /// A missing or unparsable file is replaced with the defaults. A failure to
    /// write that replacement is logged and otherwise ignored. A valid file is
    /// never rewritten.
    pub fn load_from(path: &Path, home: &Path) -> Self {
        match read_config_file(path) {
            Ok(file) => Self::from_file(file, home),
            Err(e) => {
                info!(path = %path.display(), "creating default config ({e})");
                let cfg = Self::with_defaults(home);
                if let Err(e) = cfg.save(path) {
                    warn!(path = %path.display(), "could not write default config: {e}");
                }
                cfg
            }
        }
    }

    fn from_file(file: ConfigFile, home: &Path) -> Self {
        let defaults = Self::with_defaults(home);
        // An empty path counts as unset.
        let resolve = |p: Option<PathBuf>| {
            p.filter(|p| !p.as_os_str().is_empty())
                .map(|p| paths::absolutize(home, &p))
        };
        Self {
            work_dir: resolve(file.work_dir).unwrap_or(defaults.work_dir),
            git_root: resolve(file.git_root).unwrap_or(defaults.git_root),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut data = serde_json::to_string_pretty(self)?;
        data.push('\n');
        crate::io::atomic_write(path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Derived paths
    // -----------------------------------------------------------------------

    pub fn script_dir(&self) -> PathBuf {
        paths::script_dir(&self.work_dir)
    }

    pub fn data_dir(&self) -> PathBuf {
        paths::data_dir(&self.work_dir)
    }

    /// Environment handed to gather scripts, in fixed order.
    pub fn env_pairs(&self) -> Vec<(&'static str, PathBuf)> {
        vec![
            (ENV_SCRIPT_DIR, self.script_dir()),
            (ENV_DATA_DIR, self.data_dir()),
            (ENV_DIR, self.work_dir.clone()),
            (ENV_GIT_ROOT, self.git_root.clone()),
        ]
    }

    /// `KEY=VALUE` lines for [`Config::env_pairs`].
    pub fn env_vars(&self) -> Vec<String> {
        self.env_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", value.display()))
            .collect()
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let data = std::fs::read_to_string(path)?;
    let file: ConfigFile = serde_json::from_str(&data)?;
    Ok(file)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
