//! JSON file questionnaire source.
//!
//! Reads the three static data files (decision tree, preference questions,
//! framework catalog) in their authored wire format and converts them into
//! validated domain types. All structural problems surface here, at load
//! time; the core never re-validates.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::DataConfig;
use crate::domain::catalog::{Catalog, FrameworkDescriptor};
use crate::domain::foundation::ValidationError;
use crate::domain::questionnaire::{
    DecisionTree, NodeId, PreferenceAnswer, PreferenceQuestion, QuestionNode, Questionnaire,
    TreeAnswer,
};
use crate::ports::{LoadError, QuestionnaireSource};

// ─────────────────────────────────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────────────────────────────────

/// Tree node as authored: nested, with answers discriminated by which of
/// `next`/`frameworks` is present.
#[derive(Debug, Deserialize)]
struct TreeNodeDto {
    question: String,
    answers: Vec<TreeAnswerDto>,
}

#[derive(Debug, Deserialize)]
struct TreeAnswerDto {
    option: String,
    #[serde(default)]
    next: Option<Box<TreeNodeDto>>,
    #[serde(default)]
    frameworks: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct PreferenceQuestionDto {
    question: String,
    importance_coefficient: f64,
    answers: Vec<PreferenceAnswerDto>,
}

#[derive(Debug, Deserialize)]
struct PreferenceAnswerDto {
    option: String,
    vector: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct FrameworkDto {
    name: String,
    description: String,
    website: String,
}

// ─────────────────────────────────────────────────────────────────────────
// Source
// ─────────────────────────────────────────────────────────────────────────

/// [`QuestionnaireSource`] reading the authored JSON files.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    tree_path: PathBuf,
    preferences_path: PathBuf,
    catalog_path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from explicit paths.
    pub fn new(
        tree_path: impl Into<PathBuf>,
        preferences_path: impl Into<PathBuf>,
        catalog_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tree_path: tree_path.into(),
            preferences_path: preferences_path.into(),
            catalog_path: catalog_path.into(),
        }
    }

    /// Creates a source from the data section of the configuration.
    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(
            config.tree_path.clone(),
            config.preferences_path.clone(),
            config.catalog_path.clone(),
        )
    }

    fn read<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, LoadError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Flattens the authored nested tree into the arena representation.
    ///
    /// Nodes are numbered parent-before-child, which is exactly the ordering
    /// [`DecisionTree::new`] requires to rule out cycles.
    fn flatten_tree(
        node: TreeNodeDto,
        nodes: &mut Vec<Option<QuestionNode>>,
    ) -> Result<NodeId, LoadError> {
        let id = NodeId::from_index(nodes.len());
        nodes.push(None);

        let mut answers = Vec::with_capacity(node.answers.len());
        for answer in node.answers {
            match (answer.next, answer.frameworks) {
                (Some(next), None) => {
                    let child = Self::flatten_tree(*next, nodes)?;
                    answers.push(TreeAnswer::Branch {
                        label: answer.option,
                        next: child,
                    });
                }
                (None, Some(frameworks)) => {
                    answers.push(TreeAnswer::Leaf {
                        label: answer.option,
                        frameworks,
                    });
                }
                _ => {
                    return Err(LoadError::AmbiguousAnswer {
                        label: answer.option,
                    });
                }
            }
        }

        nodes[id.index()] = Some(QuestionNode::new(node.question, answers)?);
        Ok(id)
    }

    fn build_tree(root: TreeNodeDto) -> Result<DecisionTree, LoadError> {
        let mut slots = Vec::new();
        Self::flatten_tree(root, &mut slots)?;
        let nodes = slots
            .into_iter()
            .map(|slot| {
                slot.ok_or_else(|| ValidationError::invalid_format("tree", "unfilled node slot"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DecisionTree::new(nodes)?)
    }

    fn build_catalog(dtos: Vec<FrameworkDto>) -> Result<Catalog, LoadError> {
        let descriptors = dtos
            .into_iter()
            .map(|dto| FrameworkDescriptor::new(dto.name, dto.description, dto.website))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Catalog::new(descriptors)?)
    }

    fn build_preferences(
        dtos: Vec<PreferenceQuestionDto>,
    ) -> Result<Vec<PreferenceQuestion>, LoadError> {
        dtos.into_iter()
            .map(|dto| {
                let answers = dto
                    .answers
                    .into_iter()
                    .map(|a| PreferenceAnswer::new(a.option, a.vector))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(PreferenceQuestion::new(
                    dto.question,
                    dto.importance_coefficient,
                    answers,
                )?)
            })
            .collect()
    }
}

impl JsonFileSource {
    fn load_inner(&self) -> Result<Questionnaire, LoadError> {
        let root: TreeNodeDto = Self::read(&self.tree_path)?;
        let preference_dtos: Vec<PreferenceQuestionDto> = Self::read(&self.preferences_path)?;
        let framework_dtos: Vec<FrameworkDto> = Self::read(&self.catalog_path)?;

        let tree = Self::build_tree(root)?;
        let preferences = Self::build_preferences(preference_dtos)?;
        let catalog = Self::build_catalog(framework_dtos)?;

        Ok(Questionnaire::new(tree, preferences, catalog)?)
    }
}

impl QuestionnaireSource for JsonFileSource {
    fn load(&self) -> Result<Questionnaire, LoadError> {
        match self.load_inner() {
            Ok(questionnaire) => {
                info!(
                    tree_nodes = questionnaire.tree().len(),
                    preference_questions = questionnaire.preferences().len(),
                    frameworks = questionnaire.catalog().len(),
                    "questionnaire loaded"
                );
                Ok(questionnaire)
            }
            Err(err) => {
                warn!(
                    tree_path = %self.tree_path.display(),
                    error = %err,
                    "questionnaire data rejected"
                );
                Err(err)
            }
        }
    }
}
