use serde::{Deserialize, Serialize};

/// One question/answer exchange. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    question: String,
    answer: String,
}

impl Turn {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Whether the answer is an error string standing in for a model reply.
    pub fn is_error(&self) -> bool {
        self.answer.starts_with("Error: ")
    }
}

impl From<(&str, &str)> for Turn {
    fn from((question, answer): (&str, &str)) -> Self {
        Self::new(question, answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_creation() {
        let turn = Turn::new("What is 2+2?", "4");

        assert_eq!(turn.question(), "What is 2+2?");
        assert_eq!(turn.answer(), "4");
        assert!(!turn.is_error());
    }

    #[test]
    fn test_error_answer_detected() {
        let turn = Turn::new("hi", "Error: connection refused");
        assert!(turn.is_error());
    }

    #[test]
    fn test_serializes_as_pair_object() {
        let json = serde_json::to_value(Turn::from(("a", "b"))).unwrap();
        assert_eq!(json, serde_json::json!({"question": "a", "answer": "b"}));
    }
}
