//! Word-level n-gram language modeling library.
//!
//! This crate provides a small maximum-likelihood language modeling system including:
//! - Corpus loading with tokenization and sentence boundary markers
//! - Unigram frequency/probability estimation
//! - Bigram conditional probability estimation and Markov-chain generation
//! - Internal utilities for I/O and weighted sampling
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core language models and generation logic.
///
/// This module exposes the corpus and model interfaces while keeping
/// internal sampling representations private.
pub mod model;

/// I/O utilities (corpus file loading).
///
/// Not exposed
pub(crate) mod io;
