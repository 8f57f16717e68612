use crate::lang::LangError;

/// Read-only view of a problem, as consumed by the generators.
pub trait QuestionData {
    fn frontend_id(&self) -> &str;
    /// Unique per question and safe as a path component.
    fn title_slug(&self) -> &str;
    fn title(&self) -> &str;
    fn difficulty(&self) -> &str;
    fn url(&self) -> String;
    /// Present only when the question belongs to a contest.
    fn contest_url(&self) -> Option<String>;
    /// Plain-text problem description.
    fn formatted_content(&self) -> String;
    /// Starter code for a language slug. Empty when the language is not offered.
    fn code_snippet(&self, lang_slug: &str) -> &str;
}

/// Narrows an identifier lookup down to exactly one question.
pub fn single_question<Q>(qid: &str, mut questions: Vec<Q>) -> Result<Q, LangError> {
    match questions.len() {
        0 => Err(LangError::QuestionNotFound(qid.to_string())),
        1 => Ok(questions.remove(0)),
        count => Err(LangError::AmbiguousQuestion {
            qid: qid.to_string(),
            count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_match_is_returned() {
        let q = single_question("1", vec!["two-sum"]).unwrap();
        assert_eq!(q, "two-sum");
    }

    #[test]
    fn no_match_is_not_found() {
        let err = single_question::<&str>("9999", vec![]).unwrap_err();
        assert!(matches!(err, LangError::QuestionNotFound(ref id) if id == "9999"));
    }

    #[test]
    fn multiple_matches_are_ambiguous() {
        let err = single_question("1", vec!["a", "b"]).unwrap_err();
        assert!(matches!(err, LangError::AmbiguousQuestion { count: 2, .. }));
        assert!(err.to_string().contains("multiple questions"));
    }
}
