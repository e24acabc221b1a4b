//! Linear multiclass classifier fitted via multinomial logistic regression.

use anyhow::{Context, Result};
use linfa::dataset::DatasetBase;
use linfa::prelude::Fit;
use linfa_logistic::MultiLogisticRegression;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Fitted linear model with softmax probability output.
///
/// Holds the weight matrix (`n_features x n_classes`) and per-class
/// intercepts extracted from the fitted trainer, so the persisted artifact
/// does not depend on trainer internals. `predict_probabilities` computes
/// `softmax(x · W + b)`, identical to the fitted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    weights: Array2<f64>,
    intercept: Array1<f64>,
}

impl LinearClassifier {
    /// Fit a multinomial logistic regression over a feature matrix.
    ///
    /// `labels` are class indices. The trainer sorts label values, so class
    /// columns come out in ascending index order: position `i` of the
    /// returned probabilities is class `i`.
    pub fn fit(features: Array2<f64>, labels: Vec<usize>) -> Result<Self> {
        let targets = Array1::from(labels);
        let dataset: DatasetBase<_, _> = DatasetBase::new(features, targets);
        let fitted = MultiLogisticRegression::default()
            .alpha(0.01)
            .max_iterations(500)
            .fit(&dataset)
            .context("fitting multinomial logistic regression")?;
        Ok(Self {
            weights: fitted.params().clone(),
            intercept: fitted.intercept().clone(),
        })
    }

    /// Per-class probabilities for one feature vector.
    pub fn predict_probabilities(&self, features: &Array1<f64>) -> Array1<f64> {
        let mut scores = features.dot(&self.weights) + &self.intercept;
        softmax_inplace(&mut scores);
        scores
    }

    pub fn n_classes(&self) -> usize {
        self.intercept.len()
    }
}

fn softmax_inplace(scores: &mut Array1<f64>) {
    let max = scores.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    scores.mapv_inplace(|v| (v - max).exp());
    let total = scores.sum();
    if total > 0.0 {
        scores.mapv_inplace(|v| v / total);
    }
}
