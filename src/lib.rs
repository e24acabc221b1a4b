//! Call-interpretation toolkit for dental clinic phone transcripts.
//!
//! The pipeline classifies caller intent with a tf-idf model, scores
//! urgency with a keyword heuristic, extracts structured entities, and
//! assembles one result record per call.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod pipeline;
