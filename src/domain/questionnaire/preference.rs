//! Weighted preference questions.
//!
//! Preference questions are answered after the decision tree and contribute
//! weighted score vectors. The authored list order is the presentation order
//! and is preserved exactly.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// One selectable answer to a preference question.
///
/// `weights` has one entry per catalog framework, positionally aligned with
/// the catalog; the length is validated against the catalog when the
/// questionnaire is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceAnswer {
    label: String,
    weights: Vec<f64>,
}

impl PreferenceAnswer {
    /// Creates a preference answer.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the label or weights are empty
    pub fn new(label: impl Into<String>, weights: Vec<f64>) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        if weights.is_empty() {
            return Err(ValidationError::empty_field("weights"));
        }
        Ok(Self { label, weights })
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the raw weights in catalog order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// A weighted preference question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceQuestion {
    prompt: String,
    importance_coefficient: f64,
    answers: Vec<PreferenceAnswer>,
}

impl PreferenceQuestion {
    /// Creates a preference question.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the prompt is empty or there are no answers
    pub fn new(
        prompt: impl Into<String>,
        importance_coefficient: f64,
        answers: Vec<PreferenceAnswer>,
    ) -> Result<Self, ValidationError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        if answers.is_empty() {
            return Err(ValidationError::empty_field("answers"));
        }
        Ok(Self {
            prompt,
            importance_coefficient,
            answers,
        })
    }

    /// Returns the question text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the importance coefficient applied to every answer's weights.
    pub fn importance_coefficient(&self) -> f64 {
        self.importance_coefficient
    }

    /// Returns the ordered answers.
    pub fn answers(&self) -> &[PreferenceAnswer] {
        &self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(label: &str, weights: &[f64]) -> PreferenceAnswer {
        PreferenceAnswer::new(label, weights.to_vec()).unwrap()
    }

    #[test]
    fn answer_rejects_empty_label() {
        assert!(PreferenceAnswer::new("", vec![1.0]).is_err());
    }

    #[test]
    fn answer_rejects_empty_weights() {
        assert!(PreferenceAnswer::new("Very", vec![]).is_err());
    }

    #[test]
    fn question_rejects_empty_prompt() {
        assert!(PreferenceQuestion::new("", 2.0, vec![answer("Very", &[1.0])]).is_err());
    }

    #[test]
    fn question_rejects_empty_answers() {
        assert!(PreferenceQuestion::new("How important is speed?", 2.0, vec![]).is_err());
    }

    #[test]
    fn question_preserves_answer_order() {
        let q = PreferenceQuestion::new(
            "How important is speed?",
            2.0,
            vec![answer("Very", &[1.0, 0.0]), answer("Not at all", &[0.0, 1.0])],
        )
        .unwrap();
        let labels: Vec<&str> = q.answers().iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Very", "Not at all"]);
        assert_eq!(q.importance_coefficient(), 2.0);
    }
}
