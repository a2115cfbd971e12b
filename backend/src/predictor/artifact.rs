//! Serialized regression artifacts.
//!
//! Artifacts are JSON documents tagged by `"kind"`:
//!
//! ```json
//! {
//!   "kind": "stacked",
//!   "estimators": [
//!     { "kind": "linear", "intercept": 4.2, "coefficients": [0.0, 0.1, ...] },
//!     { "kind": "tree_ensemble", "aggregation": "mean", "trees": [ { "nodes": [...] } ] }
//!   ],
//!   "final_estimator": { "kind": "linear", "intercept": 0.0, "coefficients": [0.6, 0.4] },
//!   "passthrough": false
//! }
//! ```
//!
//! Tree nodes are stored flat. A split node sends a sample to `left` when
//! `x[feature] <= threshold` and to `right` otherwise; a leaf carries a
//! `value`. Children always point forward in the node list, which keeps
//! evaluation bounded.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ModelError, RegressionModel};
use crate::models::FEATURE_COUNT;

/// Any regression model the server can evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
    Stacked(StackedModel),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

/// How tree outputs are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeAggregation {
    /// Gradient boosting: `base_score + learning_rate * sum(trees)`.
    #[default]
    Sum,
    /// Random forest: `base_score + learning_rate * mean(trees)`.
    Mean,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub trees: Vec<RegressionTree>,
    #[serde(default)]
    pub base_score: f64,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default)]
    pub aggregation: TreeAggregation,
}

fn default_learning_rate() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// Base estimators whose outputs feed a final estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedModel {
    pub estimators: Vec<ModelArtifact>,
    pub final_estimator: Box<ModelArtifact>,
    /// Append the raw features after the base predictions.
    #[serde(default)]
    pub passthrough: bool,
}

impl ModelArtifact {
    /// Load and validate an artifact for the full feature vector.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        artifact.validate(FEATURE_COUNT)?;
        Ok(artifact)
    }

    /// Check that every index in the artifact fits an input of `width` values.
    pub fn validate(&self, width: usize) -> Result<(), ModelError> {
        match self {
            ModelArtifact::Linear(model) => model.validate(width),
            ModelArtifact::TreeEnsemble(ensemble) => ensemble.validate(width),
            ModelArtifact::Stacked(stack) => stack.validate(width),
        }
    }

    /// Evaluate the model on a single row.
    pub fn evaluate(&self, row: &[f64]) -> f64 {
        match self {
            ModelArtifact::Linear(model) => model.evaluate(row),
            ModelArtifact::TreeEnsemble(ensemble) => ensemble.evaluate(row),
            ModelArtifact::Stacked(stack) => stack.evaluate(row),
        }
    }
}

impl RegressionModel for ModelArtifact {
    fn predict_row(&self, features: &[f64]) -> f64 {
        self.evaluate(features)
    }
}

impl LinearModel {
    fn validate(&self, width: usize) -> Result<(), ModelError> {
        if self.coefficients.len() != width {
            return Err(ModelError::Invalid(format!(
                "linear model has {} coefficients, expected {}",
                self.coefficients.len(),
                width
            )));
        }
        Ok(())
    }

    fn evaluate(&self, row: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(row)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

impl TreeEnsemble {
    fn validate(&self, width: usize) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::Invalid("tree ensemble has no trees".to_string()));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(width)
                .map_err(|e| ModelError::Invalid(format!("tree {}: {}", i, e)))?;
        }
        Ok(())
    }

    fn evaluate(&self, row: &[f64]) -> f64 {
        let total: f64 = self.trees.iter().map(|tree| tree.evaluate(row)).sum();
        let combined = match self.aggregation {
            TreeAggregation::Sum => total,
            TreeAggregation::Mean => total / self.trees.len() as f64,
        };
        self.base_score + self.learning_rate * combined
    }
}

impl RegressionTree {
    fn validate(&self, width: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("empty tree".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = *node
            {
                if feature >= width {
                    return Err(format!(
                        "node {} splits on feature {} but input has {}",
                        idx, feature, width
                    ));
                }
                for child in [left, right] {
                    if child <= idx || child >= self.nodes.len() {
                        return Err(format!("node {} has invalid child {}", idx, child));
                    }
                }
            }
        }
        Ok(())
    }

    fn evaluate(&self, row: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                TreeNode::Leaf { value } => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

impl StackedModel {
    fn meta_width(&self, width: usize) -> usize {
        self.estimators.len() + if self.passthrough { width } else { 0 }
    }

    fn validate(&self, width: usize) -> Result<(), ModelError> {
        if self.estimators.is_empty() {
            return Err(ModelError::Invalid(
                "stacked model has no base estimators".to_string(),
            ));
        }
        for estimator in &self.estimators {
            estimator.validate(width)?;
        }
        self.final_estimator.validate(self.meta_width(width))
    }

    fn evaluate(&self, row: &[f64]) -> f64 {
        let mut meta: Vec<f64> = self.estimators.iter().map(|e| e.evaluate(row)).collect();
        if self.passthrough {
            meta.extend_from_slice(row);
        }
        self.final_estimator.evaluate(&meta)
    }
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod artifact_tests;
