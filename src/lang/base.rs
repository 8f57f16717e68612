//! Content composer shared by every generator.

use chrono::{DateTime, Local};

use super::{CODE_BEGIN_MARK, CODE_END_MARK, FileOutput, LangError};
use crate::question::QuestionData;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Source of the authorship timestamp.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Per-invocation inputs that are not part of the question.
pub struct GenContext<'a> {
    pub author: &'a str,
    pub clock: &'a dyn Clock,
}

/// Transforms the starter snippet before it is written.
pub type Modifier<'a> = Box<dyn Fn(String, &dyn QuestionData) -> String + 'a>;

/// Wraps the code between the begin and end marker lines.
pub fn add_code_mark(line_comment: &str) -> Modifier<'_> {
    Box::new(move |code, _| {
        format!("{line_comment} {CODE_BEGIN_MARK}\n\n{code}\n\n{line_comment} {CODE_END_MARK}")
    })
}

/// Slot for stripping explanatory comments out of starter code. Currently
/// leaves the code as is.
pub fn remove_comments(code: String, _q: &dyn QuestionData) -> String {
    code
}

// Removing one mark can splice the text around it into another, so repeat
// until nothing changes.
fn scrub_marks(text: &str) -> String {
    let mut text = text.to_string();
    loop {
        let scrubbed = text.replace(CODE_BEGIN_MARK, "").replace(CODE_END_MARK, "");
        if scrubbed == text {
            return text;
        }
        text = scrubbed;
    }
}

/// Syntax table and default composition for one language.
#[derive(Debug, Clone)]
pub struct BaseLang {
    name: &'static str,
    slug: &'static str,
    short_name: &'static str,
    extension: &'static str,
    line_comment: &'static str,
    block_comment_start: &'static str,
    block_comment_end: &'static str,
}

impl BaseLang {
    pub const fn new(
        name: &'static str,
        slug: &'static str,
        short_name: &'static str,
        extension: &'static str,
        line_comment: &'static str,
        block_comment_start: &'static str,
        block_comment_end: &'static str,
    ) -> Self {
        Self {
            name,
            slug,
            short_name,
            extension,
            line_comment,
            block_comment_start,
            block_comment_end,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn slug(&self) -> &str {
        self.slug
    }

    pub fn short_name(&self) -> &str {
        self.short_name
    }

    pub fn extension(&self) -> &str {
        self.extension
    }

    pub fn line_comment(&self) -> &str {
        self.line_comment
    }

    /// `{titleSlug}{extension}`
    pub fn solution_file(&self, q: &dyn QuestionData) -> String {
        format!("{}{}", q.title_slug(), self.extension)
    }

    /// The starter snippet for this language, or an error when the question
    /// does not offer one.
    pub fn snippet<'q>(&self, q: &'q dyn QuestionData) -> Result<&'q str, LangError> {
        let code = q.code_snippet(self.slug);
        if code.is_empty() {
            return Err(LangError::MissingSnippet {
                lang: self.name.to_string(),
                slug: q.title_slug().to_string(),
            });
        }
        Ok(code)
    }

    pub fn generate_comments(&self, q: &dyn QuestionData, ctx: &GenContext<'_>) -> String {
        let now = ctx.clock.now().format(TIMESTAMP_FORMAT);
        let authorship = if ctx.author.is_empty() {
            format!("{} Created at {now}", self.line_comment)
        } else {
            format!("{} Created by {} at {now}", self.line_comment, ctx.author)
        };

        let mut content = vec![authorship, format!("{} {}", self.line_comment, q.url())];
        if let Some(contest_url) = q.contest_url() {
            content.push(format!("{} {contest_url}", self.line_comment));
        }
        content.push(String::new());
        content.push(self.block_comment_start.to_string());
        content.push(format!(
            "{}.{} ({})",
            q.frontend_id(),
            q.title(),
            q.difficulty()
        ));
        content.push(String::new());
        content.push(scrub_marks(&q.formatted_content()));
        content.push(self.block_comment_end.to_string());
        content.push(String::new());
        content.join("\n")
    }

    pub fn generate_code(
        &self,
        q: &dyn QuestionData,
        modifiers: &[Modifier<'_>],
    ) -> Result<String, LangError> {
        let code = self.snippet(q)?.to_string();
        Ok(modifiers.iter().fold(code, |code, m| m(code, q)))
    }

    /// Header, then `before_code`, the marked code region and `after_code`.
    pub fn compose(
        &self,
        q: &dyn QuestionData,
        ctx: &GenContext<'_>,
        before_code: &str,
        after_code: &str,
    ) -> Result<String, LangError> {
        let modifiers = [
            Box::new(remove_comments) as Modifier<'_>,
            add_code_mark(self.line_comment),
        ];
        let code = self.generate_code(q, &modifiers)?;
        let comment = self.generate_comments(q, ctx);
        Ok(format!("{comment}\n{before_code}{code}\n{after_code}"))
    }

    pub fn generate(
        &self,
        q: &dyn QuestionData,
        ctx: &GenContext<'_>,
    ) -> Result<Vec<FileOutput>, LangError> {
        let content = self.compose(q, ctx, "", "")?;
        Ok(vec![FileOutput {
            path: self.solution_file(q),
            content,
        }])
    }
}
