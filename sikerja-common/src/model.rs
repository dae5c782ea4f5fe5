//! Pre-trained K-Means cluster model
//!
//! The model is trained and serialized outside this codebase; here it is
//! only loaded and invoked. Centroids live in the (P_num, K_num) plane and
//! cluster ids are opaque to the categorizer.
//!
//! The model is loaded exactly once at process start and shared behind an
//! `Arc` in the application state; it is never reloaded per request.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Deserialized K-Means model artifact (`kmeans_model.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct KMeansModel {
    /// Number of clusters
    pub k: usize,
    /// Cluster centroids over (P_num, K_num)
    pub centroids: Vec<[f64; 2]>,
}

impl KMeansModel {
    /// Load the model artifact from disk
    pub fn load(path: &Path) -> Result<KMeansModel> {
        let content = std::fs::read_to_string(path)?;
        let model: KMeansModel =
            serde_json::from_str(&content).map_err(|e| Error::Model(e.to_string()))?;
        model.validate()?;
        Ok(model)
    }

    /// Load the model artifact, falling back to the compiled-in snapshot
    /// of the trained centroids when the file is absent
    pub fn load_or_default(path: &Path) -> Result<KMeansModel> {
        if path.exists() {
            let model = Self::load(path)?;
            info!("Loaded cluster model from {} (k={})", path.display(), model.k);
            Ok(model)
        } else {
            warn!(
                "Cluster model artifact not found at {}; using built-in snapshot",
                path.display()
            );
            Ok(Self::trained_snapshot())
        }
    }

    /// Compiled-in snapshot of the externally trained centroids.
    ///
    /// Five clusters over the (P_num 1..=5, K_num 1..=4) grid, matching the
    /// artifact shipped with the original deployment.
    pub fn trained_snapshot() -> KMeansModel {
        KMeansModel {
            k: 5,
            centroids: vec![
                [1.2, 1.6],
                [2.1, 2.8],
                [3.0, 2.4],
                [4.1, 3.0],
                [4.9, 3.2],
            ],
        }
    }

    /// Assign the cluster whose centroid is nearest to (p_num, k_num).
    ///
    /// Squared Euclidean distance; the lowest index wins ties, so the
    /// assignment is deterministic.
    pub fn predict(&self, p_num: f64, k_num: f64) -> i64 {
        let mut best = 0usize;
        let mut best_dist = f64::INFINITY;
        for (i, c) in self.centroids.iter().enumerate() {
            let dp = p_num - c[0];
            let dk = k_num - c[1];
            let dist = dp * dp + dk * dk;
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }
        best as i64
    }

    fn validate(&self) -> Result<()> {
        if self.centroids.is_empty() {
            return Err(Error::Model("model has no centroids".to_string()));
        }
        if self.centroids.len() != self.k {
            return Err(Error::Model(format!(
                "model declares k={} but carries {} centroids",
                self.k,
                self.centroids.len()
            )));
        }
        Ok(())
    }
}
