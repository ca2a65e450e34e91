use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CONFIG_DIR: &str = ".config/pkm";
pub const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_WORK_DIR: &str = "pkm";
pub const DEFAULT_GIT_ROOT: &str = "git";

pub const SCRIPTS_DIR: &str = "scripts";
pub const DATA_DIR: &str = "data";

// ---------------------------------------------------------------------------
// Script and artifact file names
// ---------------------------------------------------------------------------

pub const GH_REVIEWS_SCRIPT: &str = "gh_reviews.sh";
pub const JIRA_ISSUES_SCRIPT: &str = "list_jira_issues.sh";
pub const TODAYS_COMMITS_SCRIPT: &str = "output_todays_commits.sh";

pub const GH_REVIEWS_JSON: &str = "gh_reviews.json";
pub const JIRA_ISSUES_JSON: &str = "jira_issues.json";
pub const TODAYS_COMMITS_JSON: &str = "todays_commits.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR).join(CONFIG_FILE)
}

pub fn default_work_dir(home: &Path) -> PathBuf {
    home.join(DEFAULT_WORK_DIR)
}

pub fn default_git_root(home: &Path) -> PathBuf {
    home.join(DEFAULT_GIT_ROOT)
}

pub fn script_dir(work_dir: &Path) -> PathBuf {
    work_dir.join(SCRIPTS_DIR)
}

pub fn data_dir(work_dir: &Path) -> PathBuf {
    work_dir.join(DATA_DIR)
}

/// Anchor a relative path at `base`; absolute paths pass through unchanged.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
