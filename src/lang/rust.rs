use super::{BaseLang, FileOutput, GenContext, Generator, LangError};
use crate::question::QuestionData;

const RUST: BaseLang = BaseLang::new("Rust", "rust", "rs", ".rs", "//", "/*", "*/");

// LeetCode's Rust snippets only carry `impl Solution`.
const SOLUTION_SHIM: &str = "pub struct Solution;\n\n";

const MAIN_STUB: &str = "\
fn main() {
    println!(\"Run with: cargo test\");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution() {
        // add test cases here
    }
}
";

/// Writes each question as its own Cargo package so it can be tested in place.
pub struct RustGenerator {
    base: BaseLang,
}

impl RustGenerator {
    pub fn new() -> Self {
        Self { base: RUST }
    }
}

impl Default for RustGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn project_dir(q: &dyn QuestionData) -> String {
    format!("{}-{}", q.frontend_id(), q.title_slug())
}

fn manifest_path(q: &dyn QuestionData) -> String {
    format!("{}/Cargo.toml", project_dir(q))
}

fn main_path(q: &dyn QuestionData) -> String {
    format!("{}/src/main.rs", project_dir(q))
}

fn manifest(q: &dyn QuestionData) -> String {
    // Package names can't start with a digit, so prefix with "p"
    format!(
        "[package]\nname = \"p{}\"\nversion = \"0.1.0\"\nedition = \"2024\"\n\n[dependencies]\n",
        project_dir(q)
    )
}

impl Generator for RustGenerator {
    fn base(&self) -> &BaseLang {
        &self.base
    }

    fn supports_local_test(&self) -> bool {
        true
    }

    fn target_paths(&self, q: &dyn QuestionData) -> Vec<String> {
        vec![manifest_path(q), main_path(q)]
    }

    fn generate(
        &self,
        q: &dyn QuestionData,
        ctx: &GenContext<'_>,
    ) -> Result<Vec<FileOutput>, LangError> {
        let main = self.base.compose(q, ctx, SOLUTION_SHIM, &format!("\n{MAIN_STUB}"))?;
        Ok(vec![
            FileOutput {
                path: manifest_path(q),
                content: manifest(q),
            },
            FileOutput {
                path: main_path(q),
                content: main,
            },
        ])
    }
}
