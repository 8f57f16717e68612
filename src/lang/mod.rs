//! Per-language generators and the registry used to pick one.
//!
//! Every generator wraps a [`BaseLang`] and inherits its behavior through the
//! default methods of [`Generator`], overriding only what differs for its
//! language.

pub mod base;
pub mod extract;
pub mod golang;
pub mod languages;
pub mod rust;

use std::io;
use std::path::{Path, PathBuf};

pub use base::{BaseLang, Clock, FixedClock, GenContext, SystemClock};

use crate::question::QuestionData;

/// Line opening the user-owned code region. Matched verbatim by other tooling.
pub const CODE_BEGIN_MARK: &str = "@lc code=begin";
/// Line closing the user-owned code region.
pub const CODE_END_MARK: &str = "@lc code=end";

#[derive(Debug, thiserror::Error)]
pub enum LangError {
    #[error("not supported")]
    NotSupported,
    #[error("not implemented")]
    NotImplemented,
    #[error("language {0} is not supported yet")]
    UnknownLanguage(String),
    #[error("no {lang} code snippet found for {slug}")]
    MissingSnippet { lang: String, slug: String },
    #[error("no question found for {0}")]
    QuestionNotFound(String),
    #[error("multiple questions found for {qid} ({count} matches)")]
    AmbiguousQuestion { qid: String, count: usize },
    #[error("confirmation failed: {0}")]
    Confirm(#[source] io::Error),
    #[error("failed to generate library files at {path}")]
    Library {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One file produced by a generator, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutput {
    pub path: String,
    pub content: String,
}

pub trait Generator {
    /// Shared composer this generator delegates to.
    fn base(&self) -> &BaseLang;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn short_name(&self) -> &str {
        self.base().short_name()
    }

    /// Key into [`QuestionData::code_snippet`]; unique across the registry.
    fn slug(&self) -> &str {
        self.base().slug()
    }

    fn supports_local_test(&self) -> bool {
        false
    }

    /// Whether support files this generator needs already exist in `dir`.
    fn check_library(&self, _dir: &Path) -> bool {
        true
    }

    /// Writes the support files into `dir`. Must be safe to call repeatedly.
    fn generate_library(&self, _dir: &Path) -> Result<(), LangError> {
        Ok(())
    }

    /// Relative paths `generate` writes to, in write order.
    fn target_paths(&self, q: &dyn QuestionData) -> Vec<String> {
        vec![self.base().solution_file(q)]
    }

    fn generate(
        &self,
        q: &dyn QuestionData,
        ctx: &GenContext<'_>,
    ) -> Result<Vec<FileOutput>, LangError> {
        self.base().generate(q, ctx)
    }
}

impl Generator for BaseLang {
    fn base(&self) -> &BaseLang {
        self
    }
}

/// Ordered, immutable set of generators.
pub struct Registry {
    generators: Vec<Box<dyn Generator>>,
}

impl Registry {
    pub fn new(generators: Vec<Box<dyn Generator>>) -> Self {
        Self { generators }
    }

    /// The built-in language table.
    pub fn builtin() -> Self {
        Self::new(languages::supported())
    }

    /// Finds the first generator whose short name or slug starts with
    /// `token`, or whose full name equals it (case-insensitive).
    pub fn get(&self, token: &str) -> Option<&dyn Generator> {
        let token = token.to_lowercase();
        if token.is_empty() {
            return None;
        }
        self.generators
            .iter()
            .find(|g| {
                g.short_name().starts_with(&token)
                    || g.slug().starts_with(&token)
                    || g.name().to_lowercase() == token
            })
            .map(|g| &**g)
    }

    pub fn require(&self, token: &str) -> Result<&dyn Generator, LangError> {
        self.get(token)
            .ok_or_else(|| LangError::UnknownLanguage(token.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Generator> {
        self.generators.iter().map(|g| &**g)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_is_deterministic() {
        let registry = Registry::builtin();
        for g in registry.iter() {
            for token in [g.short_name(), g.slug()] {
                let first = registry.get(token).unwrap().slug().to_string();
                let second = registry.get(token).unwrap().slug().to_string();
                assert_eq!(first, second, "token {token}");
            }
        }
    }

    #[test]
    fn slugs_are_unique() {
        let registry = Registry::builtin();
        let slugs: HashSet<&str> = registry.iter().map(|g| g.slug()).collect();
        assert_eq!(slugs.len(), registry.len());
    }

    #[test]
    fn registry_order_is_pinned() {
        let registry = Registry::builtin();
        let slugs: Vec<&str> = registry.iter().map(|g| g.slug()).collect();
        assert_eq!(
            slugs,
            [
                "golang",
                "python3",
                "cpp",
                "rust",
                "java",
                "c",
                "csharp",
                "javascript",
                "typescript",
                "php",
                "ruby",
                "swift",
                "kotlin",
                "scala",
                "mysql",
            ]
        );
    }

    #[test]
    fn first_prefix_match_wins() {
        let registry = Registry::builtin();
        // "c" is C's short name, but cpp is registered earlier and starts with "c".
        assert_eq!(registry.get("c").unwrap().slug(), "cpp");
        // The full name doesn't help either: the prefix match on cpp comes first.
        assert_eq!(registry.get("C").unwrap().slug(), "cpp");
        // "java" is a prefix of "javascript" too; java comes first.
        assert_eq!(registry.get("java").unwrap().slug(), "java");
        assert_eq!(registry.get("js").unwrap().slug(), "javascript");
        assert_eq!(registry.get("py").unwrap().slug(), "python3");
        assert_eq!(registry.get("go").unwrap().slug(), "golang");
        assert_eq!(registry.get("rs").unwrap().slug(), "rust");
    }

    #[test]
    fn lookup_ignores_case_and_accepts_full_name() {
        let registry = Registry::builtin();
        assert_eq!(registry.get("Python3").unwrap().slug(), "python3");
        assert_eq!(registry.get("C++").unwrap().slug(), "cpp");
        assert_eq!(registry.get("C#").unwrap().slug(), "csharp");
    }

    #[test]
    fn unknown_token_is_none() {
        let registry = Registry::builtin();
        assert!(registry.get("brainfuck").is_none());
        assert!(registry.get("").is_none());
        let err = registry.require("cobol").err().unwrap();
        assert!(matches!(err, LangError::UnknownLanguage(ref t) if t == "cobol"));
    }

    #[test]
    fn substitute_registry() {
        let registry = Registry::new(vec![
            Box::new(BaseLang::new("C", "c", "c", ".c", "//", "/*", "*/")),
            Box::new(BaseLang::new("C++", "cpp", "cpp", ".cpp", "//", "/*", "*/")),
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("c").unwrap().slug(), "c");
        assert_eq!(registry.get("cp").unwrap().slug(), "cpp");
        assert!(registry.get("go").is_none());
    }

    #[test]
    fn defaults_for_plain_generators() {
        let registry = Registry::builtin();
        let python = registry.get("python3").unwrap();
        assert!(!python.supports_local_test());
        assert!(python.check_library(Path::new("/nonexistent")));
        assert!(python.generate_library(Path::new("/nonexistent")).is_ok());
    }
}
