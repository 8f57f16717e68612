//! Turns generator output into files under the project root.
//!
//! Files land at `{root}/{out_dir}/{path}`, where `out_dir` is the generator's
//! slug unless overridden. An existing file is only replaced when auto-yes is
//! set or the [`Confirm`] collaborator approves. A failure writing one file is
//! logged and does not stop the rest of the batch.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::confirm::{Confirm, StdinConfirm};
use crate::lang::{Clock, GenContext, Generator, LangError, SystemClock};
use crate::question::QuestionData;

/// Result of attempting to write one file.
#[derive(Debug)]
pub enum WriteOutcome {
    Written,
    /// The user declined to overwrite an existing file.
    Skipped,
    Failed(io::Error),
}

pub struct Materializer {
    root: PathBuf,
    out_dirs: BTreeMap<String, String>,
    auto_yes: bool,
    author: String,
    clock: Box<dyn Clock>,
    confirm: Box<dyn Confirm>,
}

impl Materializer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            out_dirs: BTreeMap::new(),
            auto_yes: false,
            author: String::new(),
            clock: Box::new(SystemClock),
            confirm: Box::new(StdinConfirm),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Output subdirectory for the generator with this slug.
    pub fn with_out_dir(mut self, slug: impl Into<String>, dir: impl Into<String>) -> Self {
        self.out_dirs.insert(slug.into(), dir.into());
        self
    }

    pub fn with_out_dirs(mut self, out_dirs: BTreeMap<String, String>) -> Self {
        self.out_dirs.extend(out_dirs);
        self
    }

    /// Overwrite existing files without asking.
    pub fn auto_yes(mut self, yes: bool) -> Self {
        self.auto_yes = yes;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_confirm(mut self, confirm: impl Confirm + 'static) -> Self {
        self.confirm = Box::new(confirm);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn out_dir(&self, generator: &dyn Generator) -> PathBuf {
        let dir = self
            .out_dirs
            .get(generator.slug())
            .map_or(generator.slug(), String::as_str);
        self.root.join(dir)
    }

    /// Generates the question's files and writes them, returning the paths
    /// actually written in order.
    pub fn generate(
        &self,
        generator: &dyn Generator,
        q: &dyn QuestionData,
    ) -> Result<Vec<PathBuf>, LangError> {
        generator.base().snippet(q)?;

        let dir = self.out_dir(generator);
        if !generator.check_library(&dir) {
            generator.generate_library(&dir)?;
        }

        let ctx = GenContext {
            author: &self.author,
            clock: self.clock.as_ref(),
        };
        let files = generator.generate(q, &ctx)?;
        debug_assert_eq!(
            files.iter().map(|f| f.path.as_str()).collect::<Vec<_>>(),
            generator.target_paths(q),
            "{} writes different paths than it resolves",
            generator.slug()
        );

        let mut generated = Vec::with_capacity(files.len());
        for file in files {
            let path = dir.join(&file.path);
            match self.try_write(&path, &file.content)? {
                WriteOutcome::Written => generated.push(path),
                WriteOutcome::Skipped => {
                    tracing::debug!(file = %path.display(), "skipped existing file");
                }
                WriteOutcome::Failed(err) => {
                    tracing::error!(path = %path.display(), error = %err, "failed to write file");
                }
            }
        }
        Ok(generated)
    }

    /// Where `generate` would write, without generating or touching disk.
    pub fn generate_paths_only(
        &self,
        generator: &dyn Generator,
        q: &dyn QuestionData,
    ) -> Vec<PathBuf> {
        let dir = self.out_dir(generator);
        generator
            .target_paths(q)
            .into_iter()
            .map(|path| dir.join(path))
            .collect()
    }

    /// Writes `content` to `path`, asking first if the file exists.
    ///
    /// Only a failed confirmation is an error; I/O failures come back as
    /// [`WriteOutcome::Failed`].
    pub fn try_write(&self, path: &Path, content: &str) -> Result<WriteOutcome, LangError> {
        if path.exists() && !self.auto_yes {
            let message = format!("File \"{}\" already exists, overwrite?", path.display());
            if !self.confirm.confirm(&message).map_err(LangError::Confirm)? {
                return Ok(WriteOutcome::Skipped);
            }
        }

        if let Err(err) = write_file(path, content) {
            return Ok(WriteOutcome::Failed(err));
        }
        tracing::info!(file = %path.display(), "generated");
        Ok(WriteOutcome::Written)
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::languages::PYTHON3;

    #[test]
    fn out_dir_defaults_to_slug() {
        let m = Materializer::new("/work");
        assert_eq!(m.out_dir(&PYTHON3), PathBuf::from("/work/python3"));
    }

    #[test]
    fn out_dir_override() {
        let m = Materializer::new("/work").with_out_dir("python3", "py-solutions");
        assert_eq!(m.out_dir(&PYTHON3), PathBuf::from("/work/py-solutions"));
    }

    #[test]
    fn try_write_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let m = Materializer::new(tmp.path());
        let path = tmp.path().join("a/b/c.txt");
        assert!(matches!(
            m.try_write(&path, "hi").unwrap(),
            WriteOutcome::Written
        ));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hi");
    }

    #[test]
    fn try_write_reports_io_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let m = Materializer::new(tmp.path());
        let outcome = m.try_write(&blocker.join("x.txt"), "hi").unwrap();
        assert!(matches!(outcome, WriteOutcome::Failed(_)));
    }

    #[test]
    fn try_write_asks_before_overwriting() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("x.txt");
        std::fs::write(&path, "old").unwrap();

        let m = Materializer::new(tmp.path())
            .with_confirm(|msg: &str| -> io::Result<bool> {
                assert!(msg.contains("already exists"));
                Ok(true)
            });
        assert!(matches!(
            m.try_write(&path, "new").unwrap(),
            WriteOutcome::Written
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
