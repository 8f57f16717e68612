use super::golang::GoGenerator;
use super::rust::RustGenerator;
use super::{BaseLang, Generator};

pub const PYTHON3: BaseLang = BaseLang::new("Python", "python3", "py", ".py", "#", "\"\"\"", "\"\"\"");
pub const CPP: BaseLang = BaseLang::new("C++", "cpp", "cpp", ".cpp", "//", "/*", "*/");
pub const JAVA: BaseLang = BaseLang::new("Java", "java", "java", ".java", "//", "/*", "*/");
pub const C: BaseLang = BaseLang::new("C", "c", "c", ".c", "//", "/*", "*/");
pub const CSHARP: BaseLang = BaseLang::new("C#", "csharp", "cs", ".cs", "//", "/*", "*/");
pub const JAVASCRIPT: BaseLang =
    BaseLang::new("JavaScript", "javascript", "js", ".js", "//", "/*", "*/");
pub const TYPESCRIPT: BaseLang =
    BaseLang::new("TypeScript", "typescript", "ts", ".ts", "//", "/*", "*/");
pub const PHP: BaseLang = BaseLang::new("PHP", "php", "php", ".php", "//", "/*", "*/");
pub const RUBY: BaseLang = BaseLang::new("Ruby", "ruby", "rb", ".rb", "#", "=begin", "=end");
pub const SWIFT: BaseLang = BaseLang::new("Swift", "swift", "swift", ".swift", "//", "/*", "*/");
pub const KOTLIN: BaseLang = BaseLang::new("Kotlin", "kotlin", "kt", ".kt", "//", "/*", "*/");
pub const SCALA: BaseLang = BaseLang::new("Scala", "scala", "scala", ".scala", "//", "/*", "*/");
pub const MYSQL: BaseLang = BaseLang::new("MySQL", "mysql", "sql", ".sql", "--", "/*", "*/");

/// Built-in generators. Order decides which one a shared prefix resolves to.
pub fn supported() -> Vec<Box<dyn Generator>> {
    vec![
        Box::new(GoGenerator::new()),
        Box::new(PYTHON3),
        Box::new(CPP),
        Box::new(RustGenerator::new()),
        Box::new(JAVA),
        Box::new(C),
        Box::new(CSHARP),
        Box::new(JAVASCRIPT),
        Box::new(TYPESCRIPT),
        Box::new(PHP),
        Box::new(RUBY),
        Box::new(SWIFT),
        Box::new(KOTLIN),
        Box::new(SCALA),
        Box::new(MYSQL),
    ]
}
