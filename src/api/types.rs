use serde::Deserialize;

use crate::question::QuestionData;

const LEETCODE_BASE: &str = "https://leetcode.com";

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
}

// Problem list types
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemListData {
    pub problemset_question_list: Option<ProblemsetQuestionList>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemsetQuestionList {
    pub total: i32,
    pub questions: Vec<ProblemSummary>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSummary {
    pub frontend_question_id: String,
    pub title: String,
    pub title_slug: String,
    pub difficulty: String,
    pub is_paid_only: bool,
}

// Problem detail types
#[derive(Debug, Deserialize)]
pub struct QuestionDetailData {
    pub question: Option<QuestionDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetail {
    pub question_id: String,
    pub frontend_question_id: String,
    pub title: String,
    pub title_slug: String,
    pub difficulty: String,
    pub content: Option<String>,
    pub is_paid_only: bool,
    pub code_snippets: Option<Vec<CodeSnippet>>,
    /// Not part of the API payload; set when the question is picked from a contest.
    #[serde(skip)]
    pub contest_slug: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    pub lang: String,
    pub lang_slug: String,
    pub code: String,
}

impl QuestionData for QuestionDetail {
    fn frontend_id(&self) -> &str {
        &self.frontend_question_id
    }

    fn title_slug(&self) -> &str {
        &self.title_slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn difficulty(&self) -> &str {
        &self.difficulty
    }

    fn url(&self) -> String {
        format!("{LEETCODE_BASE}/problems/{}/", self.title_slug)
    }

    fn contest_url(&self) -> Option<String> {
        self.contest_slug.as_ref().map(|contest| {
            format!(
                "{LEETCODE_BASE}/contest/{contest}/problems/{}/",
                self.title_slug
            )
        })
    }

    fn formatted_content(&self) -> String {
        match self.content {
            Some(ref html) if !html.is_empty() => html2text::from_read(html.as_bytes(), 80)
                .map(|text| text.trim_end().to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn code_snippet(&self, lang_slug: &str) -> &str {
        self.code_snippets
            .as_ref()
            .and_then(|snippets| snippets.iter().find(|s| s.lang_slug == lang_slug))
            .map(|s| s.code.as_str())
            .unwrap_or("")
    }
}
