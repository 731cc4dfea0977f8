//! Session aggregate entity.
//!
//! The session holds everything that changes while a user walks the
//! questionnaire: the phase, the cursor into the question data, the answer
//! transcript, and the accumulating score vector. The questionnaire itself is
//! immutable and passed into each transition.
//!
//! # Atomicity
//!
//! Every transition validates fully before mutating, so a failed
//! `submit_answer` leaves the session exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::catalog::ScoreVector;
use crate::domain::foundation::{SessionId, StateMachine, Timestamp};
use crate::domain::questionnaire::{NodeId, Phase, Questionnaire, TreeAnswer};
use crate::domain::scoring::PreferenceScorer;

use super::SessionError;

/// One answered question: the prompt shown and the label chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: String,
}

/// Where the session currently points inside the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    /// At a decision-tree node.
    TreeNode(NodeId),

    /// At the preference question with this list index.
    Preference(usize),

    /// Past the last question.
    Finished,
}

/// Borrowed view of the question the session currently points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentQuestion<'a> {
    /// Question text to display.
    pub prompt: &'a str,
    /// Ordered answer labels; `submit_answer` takes an index into this list.
    pub labels: Vec<&'a str>,
}

/// Session aggregate - one user's walk through the questionnaire.
///
/// # Invariants
///
/// - `cursor` is `Finished` exactly when `phase` is `Done`
/// - `scores` is present from the end of the tree phase onward, with length
///   equal to the catalog length
/// - `history` grows by exactly one record per successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,

    /// Current phase (Tree, Preferences, or Done).
    phase: Phase,

    /// Position inside the questionnaire.
    cursor: Cursor,

    /// Transcript of (prompt, chosen label) pairs in submission order.
    history: Vec<AnswerRecord>,

    /// Running score vector; absent until the tree phase ends.
    scores: Option<ScoreVector>,

    /// When the session was started.
    created_at: Timestamp,

    /// When the session last changed.
    updated_at: Timestamp,
}

impl Session {
    /// Starts a fresh session at the root of the questionnaire's tree.
    pub fn start(questionnaire: &Questionnaire) -> Self {
        let now = Timestamp::now();
        let session = Self {
            id: SessionId::new(),
            phase: Phase::Tree,
            cursor: Cursor::TreeNode(questionnaire.tree().root()),
            history: Vec::new(),
            scores: None,
            created_at: now,
            updated_at: now,
        };
        debug!(session_id = %session.id, "session started");
        session
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once the session has finished.
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Returns the current cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the transcript in submission order.
    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    /// Returns the running score vector, once the tree phase has ended.
    pub fn scores(&self) -> Option<&ScoreVector> {
        self.scores.as_ref()
    }

    /// Returns when the session was started.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the session last changed.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns the question the cursor points at.
    ///
    /// # Errors
    ///
    /// - `SessionFinished` once the session is done
    pub fn current_question<'a>(
        &self,
        questionnaire: &'a Questionnaire,
    ) -> Result<CurrentQuestion<'a>, SessionError> {
        match self.cursor {
            Cursor::TreeNode(node_id) => {
                let node = questionnaire
                    .tree()
                    .get(node_id)
                    .ok_or_else(|| SessionError::inconsistent(format!("{node_id} missing")))?;
                Ok(CurrentQuestion {
                    prompt: node.prompt(),
                    labels: node.answers().iter().map(|a| a.label()).collect(),
                })
            }
            Cursor::Preference(index) => {
                let question = questionnaire.preferences().get(index).ok_or_else(|| {
                    SessionError::inconsistent(format!("preference {index} missing"))
                })?;
                Ok(CurrentQuestion {
                    prompt: question.prompt(),
                    labels: question.answers().iter().map(|a| a.label()).collect(),
                })
            }
            Cursor::Finished => Err(SessionError::SessionFinished),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Submits the answer at `index` within the current question's answers.
    ///
    /// Returns the phase the session is in after the transition.
    ///
    /// # Errors
    ///
    /// - `AnswerOutOfRange` if `index` is not a valid answer position; the
    ///   session is left unchanged
    /// - `SessionFinished` if the session is already done
    pub fn submit_answer(
        &mut self,
        questionnaire: &Questionnaire,
        index: usize,
    ) -> Result<Phase, SessionError> {
        match self.cursor {
            Cursor::TreeNode(node_id) => self.submit_tree_answer(questionnaire, node_id, index),
            Cursor::Preference(position) => {
                self.submit_preference_answer(questionnaire, position, index)
            }
            Cursor::Finished => Err(SessionError::SessionFinished),
        }
    }

    fn submit_tree_answer(
        &mut self,
        questionnaire: &Questionnaire,
        node_id: NodeId,
        index: usize,
    ) -> Result<Phase, SessionError> {
        let node = questionnaire
            .tree()
            .get(node_id)
            .ok_or_else(|| SessionError::inconsistent(format!("{node_id} missing")))?;
        let answer = node
            .answers()
            .get(index)
            .ok_or_else(|| SessionError::answer_out_of_range(index, node.answers().len()))?;

        let record = AnswerRecord {
            question: node.prompt().to_string(),
            answer: answer.label().to_string(),
        };

        match answer {
            TreeAnswer::Branch { next, .. } => {
                self.commit(record, Cursor::TreeNode(*next), self.phase, None);
            }
            TreeAnswer::Leaf { frameworks, .. } => {
                let initial = PreferenceScorer::initial_vector(
                    questionnaire.catalog(),
                    frameworks,
                    questionnaire.preferences().len(),
                );
                let (cursor, phase) = self.position_after_preference(questionnaire, 0)?;
                self.commit(record, cursor, phase, Some(initial));
            }
        }
        Ok(self.phase)
    }

    fn submit_preference_answer(
        &mut self,
        questionnaire: &Questionnaire,
        position: usize,
        index: usize,
    ) -> Result<Phase, SessionError> {
        let question = questionnaire
            .preferences()
            .get(position)
            .ok_or_else(|| SessionError::inconsistent(format!("preference {position} missing")))?;
        let answer = question
            .answers()
            .get(index)
            .ok_or_else(|| SessionError::answer_out_of_range(index, question.answers().len()))?;

        let record = AnswerRecord {
            question: question.prompt().to_string(),
            answer: answer.label().to_string(),
        };

        let contribution = PreferenceScorer::contribution(question, answer);
        let mut scores = self
            .scores
            .clone()
            .ok_or_else(|| SessionError::inconsistent("score vector missing in preference phase"))?;
        scores.accumulate(&contribution)?;

        let (cursor, phase) = self.position_after_preference(questionnaire, position + 1)?;
        self.commit(record, cursor, phase, Some(scores));
        Ok(self.phase)
    }

    /// Computes where the session stands once preference question `next`
    /// would be presented. Walking past the end of the list finishes the
    /// session; an empty list finishes it straight from the tree phase.
    fn position_after_preference(
        &self,
        questionnaire: &Questionnaire,
        next: usize,
    ) -> Result<(Cursor, Phase), SessionError> {
        if next < questionnaire.preferences().len() {
            let phase = if self.phase == Phase::Preferences {
                Phase::Preferences
            } else {
                self.phase.transition_to(Phase::Preferences)?
            };
            Ok((Cursor::Preference(next), phase))
        } else {
            Ok((Cursor::Finished, self.phase.transition_to(Phase::Done)?))
        }
    }

    /// Applies a fully-validated transition in one step.
    fn commit(
        &mut self,
        record: AnswerRecord,
        cursor: Cursor,
        phase: Phase,
        scores: Option<ScoreVector>,
    ) {
        self.history.push(record);
        self.cursor = cursor;
        self.phase = phase;
        if let Some(scores) = scores {
            self.scores = Some(scores);
        }
        self.updated_at = Timestamp::now();
        debug!(
            session_id = %self.id,
            phase = self.phase.label(),
            cursor = ?self.cursor,
            answered = self.history.len(),
            "session advanced"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, FrameworkDescriptor};
    use crate::domain::questionnaire::{
        DecisionTree, PreferenceAnswer, PreferenceQuestion, QuestionNode,
    };

    fn catalog() -> Catalog {
        Catalog::new(vec![
            FrameworkDescriptor::new("A", "a", "https://a.example").unwrap(),
            FrameworkDescriptor::new("B", "b", "https://b.example").unwrap(),
            FrameworkDescriptor::new("C", "c", "https://c.example").unwrap(),
        ])
        .unwrap()
    }

    /// Root asks one question: "Yes" leads deeper, "No" qualifies {A}.
    /// The deeper node's "Yes" qualifies {B, C}.
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

    fn preference(coefficient: f64, weights: Vec<Vec<f64>>) -> PreferenceQuestion {
        let answers = weights
            .into_iter()
            .enumerate()
            .map(|(i, w)| PreferenceAnswer::new(format!("Option {i}"), w).unwrap())
            .collect();
        PreferenceQuestion::new("How important is speed?", coefficient, answers).unwrap()
    }

    fn questionnaire(preferences: Vec<PreferenceQuestion>) -> Questionnaire {
        Questionnaire::new(tree(), preferences, catalog()).unwrap()
    }

    mod starting {
        use super::*;

        #[test]
        fn start_begins_at_tree_root() {
            let q = questionnaire(vec![]);
            let session = Session::start(&q);
            assert_eq!(session.phase(), Phase::Tree);
            assert_eq!(session.cursor(), Cursor::TreeNode(NodeId::from_index(0)));
            assert!(session.history().is_empty());
            assert!(session.scores().is_none());
        }

        #[test]
        fn restart_resets_from_any_phase() {
            let q = questionnaire(vec![preference(2.0, vec![vec![1.0, 0.0, 3.0]])]);
            let mut session = Session::start(&q);
            session.submit_answer(&q, 1).unwrap();
            session.submit_answer(&q, 0).unwrap();
            assert!(session.is_done());

            let session = Session::start(&q);
            assert_eq!(session.phase(), Phase::Tree);
            assert!(session.history().is_empty());
            assert!(session.scores().is_none());
        }

        #[test]
        fn restarted_sessions_get_new_ids() {
            let q = questionnaire(vec![]);
            let first = Session::start(&q);
            let second = Session::start(&q);
            assert_ne!(first.id(), second.id());
        }
    }

    mod tree_phase {
        use super::*;

        #[test]
        fn branch_answer_moves_to_next_node() {
            let q = questionnaire(vec![]);
            let mut session = Session::start(&q);
            let phase = session.submit_answer(&q, 0).unwrap();
            assert_eq!(phase, Phase::Tree);
            assert_eq!(session.cursor(), Cursor::TreeNode(NodeId::from_index(1)));
            assert!(session.scores().is_none());
        }

        #[test]
        fn leaf_answer_builds_initial_vector() {
            let q = questionnaire(vec![preference(2.0, vec![vec![1.0, 0.0, 3.0]])]);
            let mut session = Session::start(&q);
            let phase = session.submit_answer(&q, 1).unwrap();
            assert_eq!(phase, Phase::Preferences);
            assert_eq!(session.cursor(), Cursor::Preference(0));
            assert_eq!(session.scores().unwrap().as_slice(), &[0.5, 0.0, 0.0]);
        }

        #[test]
        fn leaf_answer_with_no_preferences_finishes_directly() {
            let q = questionnaire(vec![]);
            let mut session = Session::start(&q);
            let phase = session.submit_answer(&q, 1).unwrap();
            assert_eq!(phase, Phase::Done);
            assert_eq!(session.cursor(), Cursor::Finished);
            assert_eq!(session.scores().unwrap().as_slice(), &[0.0, 0.0, 0.0]);
        }

        #[test]
        fn out_of_range_index_leaves_session_unchanged() {
            let q = questionnaire(vec![]);
            let mut session = Session::start(&q);
            let before = session.clone();

            let err = session.submit_answer(&q, 5).unwrap_err();
            assert_eq!(
                err,
                SessionError::AnswerOutOfRange {
                    index: 5,
                    available: 2
                }
            );
            assert_eq!(session, before);
        }

        #[test]
        fn history_records_prompt_and_label() {
            let q = questionnaire(vec![]);
            let mut session = Session::start(&q);
            session.submit_answer(&q, 0).unwrap();
            session.submit_answer(&q, 0).unwrap();

            assert_eq!(session.history().len(), 2);
            assert_eq!(session.history()[0].question, "Need SSR?");
            assert_eq!(session.history()[0].answer, "Yes");
            assert_eq!(session.history()[1].question, "Large team?");
            assert_eq!(session.history()[1].answer, "Yes");
        }
    }

    mod preference_phase {
        use super::*;

        #[test]
        fn contribution_accumulates_into_scores() {
            let q = questionnaire(vec![preference(2.0, vec![vec![1.0, 0.0, 3.0]])]);
            let mut session = Session::start(&q);
            session.submit_answer(&q, 1).unwrap();
            let phase = session.submit_answer(&q, 0).unwrap();

            assert_eq!(phase, Phase::Done);
            assert_eq!(session.scores().unwrap().as_slice(), &[2.5, 0.0, 6.0]);
        }

        #[test]
        fn preference_questions_are_presented_in_list_order() {
            let q = questionnaire(vec![
                preference(1.0, vec![vec![1.0, 0.0, 0.0]]),
                preference(1.0, vec![vec![0.0, 1.0, 0.0]]),
            ]);
            let mut session = Session::start(&q);
            session.submit_answer(&q, 1).unwrap();

            assert_eq!(session.cursor(), Cursor::Preference(0));
            session.submit_answer(&q, 0).unwrap();
            assert_eq!(session.cursor(), Cursor::Preference(1));
            assert_eq!(session.phase(), Phase::Preferences);
            session.submit_answer(&q, 0).unwrap();
            assert!(session.is_done());
        }

        #[test]
        fn out_of_range_preference_index_is_rejected_unchanged() {
            let q = questionnaire(vec![preference(2.0, vec![vec![1.0, 0.0, 3.0]])]);
            let mut session = Session::start(&q);
            session.submit_answer(&q, 1).unwrap();
            let before = session.clone();

            assert!(session.submit_answer(&q, 9).is_err());
            assert_eq!(session, before);
        }

        #[test]
        fn vector_length_stays_equal_to_catalog_length() {
            let q = questionnaire(vec![
                preference(1.0, vec![vec![1.0, 0.0, 0.0]]),
                preference(3.0, vec![vec![0.0, 2.0, 0.0]]),
            ]);
            let mut session = Session::start(&q);
            session.submit_answer(&q, 1).unwrap();
            while !session.is_done() {
                assert_eq!(session.scores().unwrap().len(), q.catalog().len());
                session.submit_answer(&q, 0).unwrap();
            }
            assert_eq!(session.scores().unwrap().len(), q.catalog().len());
        }
    }

    mod done_phase {
        use super::*;

        #[test]
        fn submitting_after_done_fails() {
            let q = questionnaire(vec![]);
            let mut session = Session::start(&q);
            session.submit_answer(&q, 1).unwrap();
            assert!(session.is_done());
            assert_eq!(
                session.submit_answer(&q, 0).unwrap_err(),
                SessionError::SessionFinished
            );
        }

        #[test]
        fn current_question_fails_when_done() {
            let q = questionnaire(vec![]);
            let mut session = Session::start(&q);
            session.submit_answer(&q, 1).unwrap();
            assert_eq!(
                session.current_question(&q).unwrap_err(),
                SessionError::SessionFinished
            );
        }
    }

    mod current_question {
        use super::*;

        #[test]
        fn tree_question_exposes_prompt_and_labels() {
            let q = questionnaire(vec![]);
            let session = Session::start(&q);
            let current = session.current_question(&q).unwrap();
            assert_eq!(current.prompt, "Need SSR?");
            assert_eq!(current.labels, vec!["Yes", "No"]);
        }

        #[test]
        fn preference_question_exposes_prompt_and_labels() {
            let q = questionnaire(vec![preference(2.0, vec![vec![1.0, 0.0, 3.0]])]);
            let mut session = Session::start(&q);
            session.submit_answer(&q, 1).unwrap();
            let current = session.current_question(&q).unwrap();
            assert_eq!(current.prompt, "How important is speed?");
            assert_eq!(current.labels, vec!["Option 0"]);
        }
    }
}
