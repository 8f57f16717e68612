use std::path::Path;

use super::{BaseLang, FileOutput, GenContext, Generator, LangError};
use crate::question::QuestionData;

const GO: BaseLang = BaseLang::new("Go", "golang", "go", ".go", "//", "/*", "*/");

const GO_MOD: &str = "go.mod";
const GO_MOD_CONTENT: &str = "module leetcode-solutions\n\ngo 1.21\n";

/// One `package main` directory per question inside a shared Go module.
pub struct GoGenerator {
    base: BaseLang,
}

impl GoGenerator {
    pub fn new() -> Self {
        Self { base: GO }
    }
}

impl Default for GoGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn solution_path(q: &dyn QuestionData) -> String {
    format!("{}/solution.go", q.title_slug())
}

impl Generator for GoGenerator {
    fn base(&self) -> &BaseLang {
        &self.base
    }

    fn check_library(&self, dir: &Path) -> bool {
        dir.join(GO_MOD).is_file()
    }

    fn generate_library(&self, dir: &Path) -> Result<(), LangError> {
        let path = dir.join(GO_MOD);
        if path.is_file() {
            return Ok(());
        }
        std::fs::create_dir_all(dir)
            .and_then(|()| std::fs::write(&path, GO_MOD_CONTENT))
            .map_err(|source| LangError::Library {
                path: path.clone(),
                source,
            })?;
        tracing::info!(file = %path.display(), "generated library");
        Ok(())
    }

    fn target_paths(&self, q: &dyn QuestionData) -> Vec<String> {
        vec![solution_path(q)]
    }

    fn generate(
        &self,
        q: &dyn QuestionData,
        ctx: &GenContext<'_>,
    ) -> Result<Vec<FileOutput>, LangError> {
        let content = self
            .base
            .compose(q, ctx, "package main\n\n", "\nfunc main() {}\n")?;
        Ok(vec![FileOutput {
            path: solution_path(q),
            content,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{CodeSnippet, QuestionDetail};
    use crate::lang::SystemClock;

    #[test]
    fn library_is_generated_once() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("golang");
        let generator = GoGenerator::new();

        assert!(!generator.check_library(&dir));
        generator.generate_library(&dir).unwrap();
        assert!(generator.check_library(&dir));

        std::fs::write(dir.join(GO_MOD), "module custom\n").unwrap();
        generator.generate_library(&dir).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.join(GO_MOD)).unwrap(),
            "module custom\n"
        );
    }

    #[test]
    fn library_failure_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let err = GoGenerator::new()
            .generate_library(&blocker.join("golang"))
            .unwrap_err();
        assert!(matches!(err, LangError::Library { .. }));
    }

    #[test]
    fn solution_has_package_clause() {
        let q = QuestionDetail {
            frontend_question_id: "1".into(),
            title: "Two Sum".into(),
            title_slug: "two-sum".into(),
            difficulty: "Easy".into(),
            code_snippets: Some(vec![CodeSnippet {
                lang: "Go".into(),
                lang_slug: "golang".into(),
                code: "func twoSum(nums []int, target int) []int {\n}".into(),
            }]),
            ..Default::default()
        };
        let ctx = GenContext {
            author: "",
            clock: &SystemClock,
        };
        let files = GoGenerator::new().generate(&q, &ctx).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "two-sum/solution.go");
        assert!(files[0].content.contains("package main\n\n// @lc code=begin"));
        assert!(files[0].content.ends_with("// @lc code=end\n\nfunc main() {}\n"));
    }
}
