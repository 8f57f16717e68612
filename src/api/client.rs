use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::json;

use super::queries::{PROBLEM_SEARCH_QUERY, QUESTION_DETAIL_QUERY};
use super::types::*;

const LEETCODE_GRAPHQL: &str = "https://leetcode.com/graphql";
const SEARCH_LIMIT: i32 = 50;

#[derive(Clone)]
pub struct LeetCodeClient {
    client: Client,
}

impl LeetCodeClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    pub async fn search_problems(&self, keywords: &str) -> Result<Vec<ProblemSummary>> {
        let body = json!({
            "query": PROBLEM_SEARCH_QUERY,
            "variables": {
                "categorySlug": "all-code-essentials",
                "limit": SEARCH_LIMIT,
                "skip": 0,
                "filters": { "searchKeywords": keywords },
            }
        });

        let resp = self
            .client
            .post(LEETCODE_GRAPHQL)
            .header("Content-Type", "application/json")
            .header("Referer", "https://leetcode.com/problemset/")
            .json(&body)
            .send()
            .await
            .context("Failed to send problem search request")?;

        let data: GraphQLResponse<ProblemListData> = resp
            .json()
            .await
            .context("Failed to parse problem search response")?;

        let list = data
            .data
            .and_then(|d| d.problemset_question_list)
            .context("No problem list data in response")?;

        Ok(list.questions)
    }

    pub async fn fetch_problem_detail(&self, slug: &str) -> Result<QuestionDetail> {
        let body = json!({
            "query": QUESTION_DETAIL_QUERY,
            "variables": {
                "titleSlug": slug,
            }
        });

        let resp = self
            .client
            .post(LEETCODE_GRAPHQL)
            .header("Content-Type", "application/json")
            .header("Referer", format!("https://leetcode.com/problems/{}/", slug))
            .json(&body)
            .send()
            .await
            .context("Failed to send problem detail request")?;

        let data: GraphQLResponse<QuestionDetailData> = resp
            .json()
            .await
            .context("Failed to parse problem detail response")?;

        data.data
            .and_then(|d| d.question)
            .with_context(|| format!("No question data for '{slug}'"))
    }

    /// Resolves a question identifier to every matching question.
    ///
    /// A numeric identifier is matched exactly against frontend ids; anything
    /// else is taken as a title slug.
    pub async fn find_questions(&self, qid: &str) -> Result<Vec<QuestionDetail>> {
        if !is_frontend_id(qid) {
            return Ok(vec![self.fetch_problem_detail(qid).await?]);
        }

        let matches: Vec<ProblemSummary> = self
            .search_problems(qid)
            .await?
            .into_iter()
            .filter(|p| p.frontend_question_id == qid)
            .collect();

        let mut details = Vec::with_capacity(matches.len());
        for summary in matches {
            details.push(self.fetch_problem_detail(&summary.title_slug).await?);
        }
        Ok(details)
    }
}

fn is_frontend_id(qid: &str) -> bool {
    !qid.is_empty() && qid.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_are_frontend_ids() {
        assert!(is_frontend_id("1"));
        assert!(is_frontend_id("2337"));
        assert!(!is_frontend_id("two-sum"));
        assert!(!is_frontend_id(""));
    }
}
