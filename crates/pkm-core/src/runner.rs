//! Sequential execution of the gather scripts.
//!
//! Scripts are plain bash files under `<workDir>/scripts`. Each one runs with
//! the work directory as its cwd and the `PKM_*` variables layered over the
//! inherited environment. Stdout and stderr go straight to the terminal; the
//! scripts write their JSON artifacts into the data directory themselves.
//!
//! Execution stops at the first script that cannot be started or exits
//! non-zero, since later scripts may depend on what it would have produced.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{PkmError, Result};
use crate::paths;

/// Interpreter every gather script is run with.
pub const INTERPRETER: &str = "bash";

/// A gather step: a human label and the script's file name under `scripts/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSpec {
    pub label: &'static str,
    pub file: &'static str,
}

/// Gather scripts in execution order.
pub const SCRIPTS: [ScriptSpec; 3] = [
    ScriptSpec {
        label: "GitHub reviews",
        file: paths::GH_REVIEWS_SCRIPT,
    },
    ScriptSpec {
        label: "Jira issues",
        file: paths::JIRA_ISSUES_SCRIPT,
    },
    ScriptSpec {
        label: "today's commits",
        file: paths::TODAYS_COMMITS_SCRIPT,
    },
];

#[derive(Debug, Clone)]
pub struct ScriptRunner {
    interpreter: PathBuf,
    script_dir: PathBuf,
    work_dir: PathBuf,
    env: Vec<(&'static str, PathBuf)>,
}

impl ScriptRunner {
    /// Build a runner for `config`, locating the interpreter on `PATH`.
    pub fn new(config: &Config) -> Result<Self> {
        let interpreter = which::which(INTERPRETER)
            .map_err(|_| PkmError::InterpreterNotFound(INTERPRETER.to_string()))?;
        Ok(Self::with_interpreter(config, interpreter))
    }

    pub fn with_interpreter(config: &Config, interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script_dir: config.script_dir(),
            work_dir: config.work_dir.clone(),
            env: config.env_pairs(),
        }
    }

    pub fn script_path(&self, script: &ScriptSpec) -> PathBuf {
        self.script_dir.join(script.file)
    }

    /// Run one script to completion.
    pub fn run(&self, script: &ScriptSpec) -> Result<()> {
        let path = self.script_path(script);
        if !path.is_file() {
            return Err(PkmError::ScriptNotFound {
                script: script.file.to_string(),
                path,
            });
        }

        debug!(script = script.file, label = script.label, interpreter = %self.interpreter.display(), "spawning");
        let status = self
            .command(&path)
            .status()
            .map_err(|source| PkmError::ScriptSpawnFailed {
                script: script.file.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(PkmError::ScriptFailed {
                script: script.file.to_string(),
                status,
            });
        }
        info!(script = script.file, "finished");
        Ok(())
    }

    /// Run `scripts` in order, stopping at the first failure.
    ///
    /// `on_start` is called just before each script is spawned.
    pub fn run_all(
        &self,
        scripts: &[ScriptSpec],
        mut on_start: impl FnMut(&ScriptSpec),
    ) -> Result<()> {
        for script in scripts {
            on_start(script);
            self.run(script)?;
        }
        Ok(())
    }

    fn command(&self, script_path: &Path) -> Command {
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(script_path)
            .current_dir(&self.work_dir)
            .envs(self.env.iter().map(|(k, v)| (*k, v.as_os_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

/// Run every gather script for `config`.
///
/// The data directory is created first so scripts can write into it.
pub fn gather(config: &Config, on_start: impl FnMut(&ScriptSpec)) -> Result<()> {
    let runner = ScriptRunner::new(config)?;
    crate::io::ensure_dir(&config.data_dir())?;
    runner.run_all(&SCRIPTS, on_start)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(scripts: &[(&str, &str)]) -> (TempDir, Config) {
        let dir = TempDir::new().unwrap();
        let cfg = Config::new(dir.path().join("work"), dir.path().join("git"));
        std::fs::create_dir_all(cfg.script_dir()).unwrap();
        std::fs::create_dir_all(cfg.data_dir()).unwrap();
        for (file, body) in scripts {
            std::fs::write(cfg.script_dir().join(file), body).unwrap();
        }
        (dir, cfg)
    }

    #[test]
    fn scripts_run_in_fixed_order() {
        let files: Vec<&str> = SCRIPTS.iter().map(|s| s.file).collect();
        assert_eq!(
            files,
            [
                "gh_reviews.sh",
                "list_jira_issues.sh",
                "output_todays_commits.sh"
            ]
        );
    }

    #[test]
    fn all_scripts_succeed() {
        let (_dir, cfg) = setup(&[
            ("gh_reviews.sh", "echo '[]' > \"$PKM_DATA_DIR/gh_reviews.json\"\n"),
            ("list_jira_issues.sh", "exit 0\n"),
            ("output_todays_commits.sh", "exit 0\n"),
        ]);
        let runner = ScriptRunner::new(&cfg).unwrap();
        let mut started = Vec::new();
        runner
            .run_all(&SCRIPTS, |s| started.push(s.file))
            .unwrap();
        assert_eq!(started.len(), 3);
        assert!(cfg.data_dir().join("gh_reviews.json").exists());
    }

    #[test]
    fn stops_at_first_failing_script() {
        let (_dir, cfg) = setup(&[
            ("gh_reviews.sh", "exit 0\n"),
            ("list_jira_issues.sh", "exit 3\n"),
            ("output_todays_commits.sh", "touch \"$PKM_DIR/third-ran\"\n"),
        ]);
        let runner = ScriptRunner::new(&cfg).unwrap();
        let mut started = Vec::new();
        let err = runner
            .run_all(&SCRIPTS, |s| started.push(s.file))
            .unwrap_err();

        assert!(matches!(err, PkmError::ScriptFailed { .. }));
        assert_eq!(err.script(), Some("list_jira_issues.sh"));
        assert!(err.to_string().contains("list_jira_issues.sh"));
        assert_eq!(started, ["gh_reviews.sh", "list_jira_issues.sh"]);
        assert!(!cfg.work_dir.join("third-ran").exists());
    }

    #[test]
    fn missing_script_is_reported_without_spawning() {
        let (_dir, cfg) = setup(&[("gh_reviews.sh", "exit 0\n")]);
        let runner = ScriptRunner::new(&cfg).unwrap();
        let err = runner.run_all(&SCRIPTS, |_| {}).unwrap_err();
        assert!(matches!(err, PkmError::ScriptNotFound { .. }));
        assert_eq!(err.script(), Some("list_jira_issues.sh"));
    }

    #[test]
    fn scripts_see_pkm_environment_and_work_dir() {
        let (_dir, cfg) = setup(&[(
            "gh_reviews.sh",
            "printf '%s\\n' \"$PKM_SCRIPT_DIR\" \"$PKM_DATA_DIR\" \"$PKM_DIR\" \"$PKM_GIT_ROOT\" \"$PWD\" > \"$PKM_DATA_DIR/env.txt\"\n",
        )]);
        let runner = ScriptRunner::new(&cfg).unwrap();
        runner.run(&SCRIPTS[0]).unwrap();

        let written = std::fs::read_to_string(cfg.data_dir().join("env.txt")).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], cfg.script_dir().to_str().unwrap());
        assert_eq!(lines[1], cfg.data_dir().to_str().unwrap());
        assert_eq!(lines[2], cfg.work_dir.to_str().unwrap());
        assert_eq!(lines[3], cfg.git_root.to_str().unwrap());
        assert_eq!(
            std::fs::canonicalize(lines[4]).unwrap(),
            std::fs::canonicalize(&cfg.work_dir).unwrap()
        );
    }

    #[test]
    fn unlaunchable_interpreter_is_a_spawn_failure() {
        let (dir, cfg) = setup(&[("gh_reviews.sh", "exit 0\n")]);
        let runner = ScriptRunner::with_interpreter(&cfg, dir.path().join("no-such-shell"));
        let err = runner.run(&SCRIPTS[0]).unwrap_err();
        assert!(matches!(err, PkmError::ScriptSpawnFailed { .. }));
    }

    #[test]
    fn gather_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::new(dir.path().join("work"), dir.path().join("git"));
        std::fs::create_dir_all(cfg.script_dir()).unwrap();
        for script in SCRIPTS {
            std::fs::write(cfg.script_dir().join(script.file), "exit 0\n").unwrap();
        }
        gather(&cfg, |_| {}).unwrap();
        assert!(cfg.data_dir().is_dir());
    }
}
