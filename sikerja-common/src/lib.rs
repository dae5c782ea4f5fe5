//! # SI-KERJA Common Library
//!
//! Shared code for the SI-KERJA performance evaluation dashboard:
//! - Scoring (P/K bucketing) and categorization (Nilai Kinerja lookup)
//! - Employee record assembly
//! - Pre-trained K-Means cluster model loading and prediction
//! - Configuration loading and root folder resolution
//! - Database initialization

pub mod category;
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod records;
pub mod scoring;

pub use category::{categorize, Category};
pub use error::{Error, Result};
