//! Top-level module for the n-gram language modeling system.
//!
//! This crate provides word-level maximum-likelihood models, including:
//! - Corpus loading and tokenization (`Corpus`)
//! - Unigram frequency/probability estimation (`Unigram`)
//! - Bigram conditional probability estimation (`Bigram`)
//! - Internal weighted sampling (`Sampler`)
//! - Internal per-predecessor transition tables (`Successors`)

/// Corpus loader: tokenized, boundary-annotated sentences plus vocabulary.
///
/// Exposes file loading with configurable sentence boundary markers,
/// and read-only views over sentences, vocabulary and sentence counts.
pub mod corpus;

/// Maximum-likelihood unigram model.
///
/// Handles parallel token counting, probability normalization,
/// and single-token weighted random generation.
pub mod unigram;

/// Maximum-likelihood bigram model, composed over `Unigram`.
///
/// Handles adjacent-pair counting, conditional probability normalization,
/// and Markov-chain sequence generation.
pub mod bigram;

/// Internal frozen categorical distribution for weighted draws.
///
/// Entries are sorted by token and resolved by cumulative subtraction.
/// This module is not exposed publicly.
mod sampler;

/// Internal per-predecessor follower table.
///
/// Accumulates follower occurrence counts during the counting pass and
/// supports partial-model merging. This module is not exposed publicly.
mod successors;
