//! The manifest runner: walks datasets in order, executing each one's actions
//! inside its own working directory.
//!
//! A dataset either finishes or has its working directory removed. Failures
//! never cross the dataset boundary; the run always continues with the next
//! dataset. A working directory that already exists marks its dataset as
//! done, whatever state it is in.

use std::path::{Path, PathBuf};

use crate::action::Action;
use crate::console::Console;
use crate::error::{FetchError, Result};
use crate::handlers::{self, DatasetContext};
use crate::io;
use crate::manifest::{Dataset, Manifest, Settings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFailure {
    pub name: String,
    pub error: String,
}

/// What happened to each dataset during a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<DatasetFailure>,
}

pub struct Runner {
    root: PathBuf,
    base: PathBuf,
    settings: Settings,
    http: reqwest::blocking::Client,
    console: Console,
}

impl Runner {
    /// `root` receives one directory per dataset; `base` is where relative
    /// paths inside actions (license files) are looked up.
    pub fn new(root: PathBuf, base: PathBuf, settings: Settings, console: Console) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()?;
        Ok(Self {
            root,
            base,
            settings,
            http,
            console,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn run(&mut self, manifest: &Manifest) -> Result<RunSummary> {
        io::ensure_dir(&self.root)?;
        let mut summary = RunSummary::default();

        for dataset in &manifest.datasets {
            let name = dataset.name.as_str();
            if let Err(e) = validate_name(name) {
                self.report(|c| c.arrow(format!("Can't work on {name}: {e}")));
                summary.failed.push(DatasetFailure {
                    name: name.to_string(),
                    error: e.to_string(),
                });
                continue;
            }

            let dir = self.root.join(name);
            if dir.exists() {
                self.report(|c| c.arrow(format!("{name} already exists, skipping...")));
                summary.skipped.push(name.to_string());
                continue;
            }

            self.report(|c| c.arrow(format!("Working on {name}")));
            let result = io::ensure_dir(&dir).and_then(|_| self.execute(dataset, &dir));
            match result {
                Ok(()) => summary.completed.push(name.to_string()),
                Err(e) => {
                    tracing::debug!(dataset = name, error = %e, "dataset failed");
                    io::remove_dir_quiet(&dir);
                    self.report(|c| {
                        c.arrow(format!("Can't continue on {name}, removing..."))?;
                        c.line(&e)
                    });
                    summary.failed.push(DatasetFailure {
                        name: name.to_string(),
                        error: e.to_string(),
                    });
                }
            }

            if io::is_empty_dir(&dir) {
                io::remove_dir_quiet(&dir);
            }

            self.report(|c| {
                c.confirm(format!("Done with {name}, press [Return] to continue..."))?;
                c.line("")
            });
        }

        self.report(|c| {
            c.arrow("All done")?;
            c.flush()
        });
        Ok(summary)
    }

    /// Progress output is best-effort; a broken console never ends the run.
    fn report(&mut self, write: impl FnOnce(&mut Console) -> std::io::Result<()>) {
        if let Err(e) = write(&mut self.console) {
            tracing::warn!(error = %e, "console output failed");
        }
    }

    fn execute(&mut self, dataset: &Dataset, dir: &Path) -> Result<()> {
        let actions = dataset.actions.as_array().ok_or_else(|| {
            FetchError::InvalidManifest(format!(
                "dataset '{}' must be a list of actions",
                dataset.name
            ))
        })?;

        let mut ctx = DatasetContext {
            name: &dataset.name,
            dir,
            base: &self.base,
            settings: &self.settings,
            http: &self.http,
            console: &mut self.console,
        };
        for raw in actions {
            let action = Action::parse(raw)?;
            handlers::execute(&action, &mut ctx)?;
        }
        Ok(())
    }
}

/// Dataset names become directory names and must stay inside the root.
fn validate_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || Path::new(name).is_absolute();
    if bad {
        return Err(FetchError::InvalidManifest(format!(
            "'{name}' is not a valid dataset directory name"
        )));
    }
    Ok(())
}
