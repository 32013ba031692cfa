//! # Brain Module
//!
//! Rule-based question answering over member messages.
//! No model, no learned weights: substring checks and regex captures only.
//!
//! ## Components
//! - `normalize`: Text normalization and member name extraction
//! - `intent`: Ordered intent classification
//! - `patterns`: Named regex captures used by the extractors
//! - `keywords`: Query terms for temporal questions
//! - `special_cases`: Fixed answers for known questions
//! - `extractors`: Count, when and favorites answer extraction
//! - `extraction`: Result and outcome types
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod extraction;
pub mod extractors;
pub mod intent;
pub mod keywords;
pub mod normalize;
pub mod patterns;
pub mod special_cases;

pub use analyzer::AnswerEngine;
pub use extraction::{AnswerOutcome, AnswerSource, Extraction, NoMatch, FALLBACK_ANSWER};
pub use intent::{Intent, IntentClassifier};
pub use keywords::QueryTermExtractor;
pub use normalize::{extract_member_name, normalize};
pub use special_cases::{SpecialCase, SpecialCaseTable};
