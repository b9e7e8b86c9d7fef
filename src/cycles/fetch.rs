use crate::error::Result;
use std::path::PathBuf;
use std::process::Command;

// Seam over the external log command; tests substitute canned text.
pub trait LogSource {
    fn fetch_raw_log(&self) -> Result<String>;
}

pub struct GitLog {
    repo: Option<PathBuf>,
}

impl GitLog {
    pub fn new(repo: Option<PathBuf>) -> Self {
        Self { repo }
    }
}

impl LogSource for GitLog {
    fn fetch_raw_log(&self) -> Result<String> {
        let mut cmd = Command::new("git");
        cmd.args(["log", "--pretty=format:%as|%s", "--", "."]);
        if let Some(repo) = &self.repo {
            cmd.current_dir(repo);
        }

        let output = cmd.output()?;

        // A non-zero exit (outside a repository, empty repository) is not
        // fatal here: whatever reached stdout still goes through the parser,
        // which degrades to an empty record list.
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
