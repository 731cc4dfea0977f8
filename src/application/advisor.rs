//! Advisor - facade over the questionnaire session.

use tracing::info;

use crate::domain::questionnaire::{Phase, Questionnaire};
use crate::domain::scoring::Recommender;
use crate::domain::session::{AnswerRecord, Session, SessionError};

/// Owned view of the current question, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptView {
    /// Question text.
    pub question: String,
    /// Ordered answer labels; submit the chosen label's index.
    pub options: Vec<String>,
}

/// One recommended framework with its display data and final score.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub description: String,
    pub website: String,
    pub score: f64,
}

/// Facade driving one questionnaire session at a time.
///
/// The advisor owns the immutable questionnaire and the single mutable
/// session. Each submission is one synchronous, atomic transition; restarting
/// simply replaces the session.
#[derive(Debug)]
pub struct Advisor {
    questionnaire: Questionnaire,
    session: Session,
}

impl Advisor {
    /// Creates an advisor with a fresh session at the tree root.
    pub fn new(questionnaire: Questionnaire) -> Self {
        let session = Session::start(&questionnaire);
        Self {
            questionnaire,
            session,
        }
    }

    /// Begins or restarts the session: tree phase at the root question,
    /// empty history, no score vector.
    pub fn start(&mut self) {
        info!(previous = %self.session.id(), "restarting questionnaire session");
        self.session = Session::start(&self.questionnaire);
    }

    /// Returns the current question and its ordered answer labels.
    ///
    /// # Errors
    ///
    /// - `SessionFinished` once the session is done
    pub fn current_prompt(&self) -> Result<PromptView, SessionError> {
        let current = self.session.current_question(&self.questionnaire)?;
        Ok(PromptView {
            question: current.prompt.to_string(),
            options: current.labels.iter().map(|l| l.to_string()).collect(),
        })
    }

    /// Submits the answer at `index` for the current question and returns
    /// the resulting phase.
    ///
    /// # Errors
    ///
    /// - `AnswerOutOfRange` for an invalid index (session unchanged)
    /// - `SessionFinished` if the session is already done
    pub fn submit_answer(&mut self, index: usize) -> Result<Phase, SessionError> {
        let phase = self.session.submit_answer(&self.questionnaire, index)?;
        if phase == Phase::Done {
            info!(
                session_id = %self.session.id(),
                answered = self.session.history().len(),
                "questionnaire completed"
            );
        }
        Ok(phase)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Returns true once the session has finished.
    pub fn is_done(&self) -> bool {
        self.session.is_done()
    }

    /// Returns the transcript of (prompt, chosen label) pairs.
    pub fn history(&self) -> &[AnswerRecord] {
        self.session.history()
    }

    /// Returns the ranked recommendations.
    ///
    /// # Errors
    ///
    /// - `NotFinished` before the session reaches the Done phase
    pub fn recommendations(&self) -> Result<Vec<Recommendation>, SessionError> {
        if !self.session.is_done() {
            return Err(SessionError::NotFinished);
        }
        let scores = self
            .session
            .scores()
            .ok_or_else(|| SessionError::inconsistent("finished session without scores"))?;

        Recommender::rank(scores)
            .into_iter()
            .map(|ranked| {
                let descriptor = self
                    .questionnaire
                    .catalog()
                    .get(ranked.id)
                    .ok_or_else(|| SessionError::inconsistent(format!("{} unknown", ranked.id)))?;
                Ok(Recommendation {
                    name: descriptor.name().to_string(),
                    description: descriptor.description().to_string(),
                    website: descriptor.website().to_string(),
                    score: ranked.score,
                })
            })
            .collect()
    }

    /// Returns the questionnaire this advisor runs.
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, FrameworkDescriptor};
    use crate::domain::questionnaire::{
        DecisionTree, NodeId, PreferenceAnswer, PreferenceQuestion, QuestionNode, TreeAnswer,
    };

    fn catalog() -> Catalog {
        Catalog::new(vec![
            FrameworkDescriptor::new("A", "a", "https://a.example").unwrap(),
            FrameworkDescriptor::new("B", "b", "https://b.example").unwrap(),
            FrameworkDescriptor::new("C", "c", "https://c.example").unwrap(),
        ])
        .unwrap()
    }

    fn tree() -> DecisionTree {
        DecisionTree::new(vec![
            QuestionNode::new(
                "Need SSR?",
                vec![
                    TreeAnswer::Branch {
                        label: "Yes".to_string(),
                        next: NodeId::from_index(1),
                    },
                    TreeAnswer::Leaf {
                        label: "No".to_string(),
                        frameworks: vec!["A".to_string()],
                    },
                ],
            )
            .unwrap(),
            QuestionNode::new(
                "Large team?",
                vec![TreeAnswer::Leaf {
                    label: "Yes".to_string(),
                    frameworks: vec!["B".to_string(), "C".to_string()],
                }],
            )
            .unwrap(),
        ])
        .unwrap()
    }

    fn advisor(preferences: Vec<PreferenceQuestion>) -> Advisor {
        Advisor::new(Questionnaire::new(tree(), preferences, catalog()).unwrap())
    }

    fn speed_preference() -> PreferenceQuestion {
        PreferenceQuestion::new(
            "How important is speed?",
            2.0,
            vec![PreferenceAnswer::new("Very", vec![1.0, 0.0, 3.0]).unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn current_prompt_shows_root_question_first() {
        let advisor = advisor(vec![]);
        let prompt = advisor.current_prompt().unwrap();
        assert_eq!(prompt.question, "Need SSR?");
        assert_eq!(prompt.options, vec!["Yes", "No"]);
    }

    #[test]
    fn scenario_single_preference_recommends_only_clear_winner() {
        // qualifying {A}, coefficient 2, vector [1,0,3]:
        // initial [0.5,0,0], contribution [2,0,6], final [2.5,0,6];
        // max 6, threshold 4.8, so only C survives.
        let mut advisor = advisor(vec![speed_preference()]);
        advisor.submit_answer(1).unwrap();
        advisor.submit_answer(0).unwrap();

        let recommendations = advisor.recommendations().unwrap();
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].name, "C");
        assert_eq!(recommendations[0].score, 6.0);
        assert_eq!(recommendations[0].website, "https://c.example");
    }

    #[test]
    fn scenario_no_preferences_yields_empty_recommendations() {
        // qualifying {B, C} with zero preference questions: the scaling
        // factor is 0, every score is 0, and the strict threshold filter
        // removes everything.
        let mut advisor = advisor(vec![]);
        advisor.submit_answer(0).unwrap();
        advisor.submit_answer(0).unwrap();

        assert!(advisor.is_done());
        assert!(advisor.recommendations().unwrap().is_empty());
    }

    #[test]
    fn recommendations_before_done_fail() {
        let advisor = advisor(vec![]);
        assert_eq!(
            advisor.recommendations().unwrap_err(),
            SessionError::NotFinished
        );
    }

    #[test]
    fn start_resets_history_and_phase() {
        let mut advisor = advisor(vec![]);
        advisor.submit_answer(1).unwrap();
        assert!(advisor.is_done());

        advisor.start();
        assert_eq!(advisor.phase(), Phase::Tree);
        assert!(advisor.history().is_empty());
        assert_eq!(advisor.current_prompt().unwrap().question, "Need SSR?");
    }

    #[test]
    fn history_reflects_submissions_in_order() {
        let mut advisor = advisor(vec![speed_preference()]);
        advisor.submit_answer(0).unwrap();
        advisor.submit_answer(0).unwrap();
        advisor.submit_answer(0).unwrap();

        let history = advisor.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].question, "Need SSR?");
        assert_eq!(history[2].question, "How important is speed?");
        assert_eq!(history[2].answer, "Very");
    }

    #[test]
    fn never_more_than_three_recommendations() {
        // qualifying {B, C} plus a flat preference puts several frameworks
        // near the top; the cap still applies.
        let flat = PreferenceQuestion::new(
            "Does licensing matter?",
            1.0,
            vec![PreferenceAnswer::new("No", vec![5.0, 5.0, 5.0]).unwrap()],
        )
        .unwrap();
        let mut advisor = advisor(vec![flat]);
        advisor.submit_answer(0).unwrap();
        advisor.submit_answer(0).unwrap();
        advisor.submit_answer(0).unwrap();

        assert!(advisor.recommendations().unwrap().len() <= 3);
    }
}
