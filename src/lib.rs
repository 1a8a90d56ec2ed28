pub mod config;
pub mod core;
pub mod detection;
pub mod service;

pub use core::language::{Language, UnknownLanguage};
pub use detection::{detect_language, LanguageScorer, ScoreVector, ScoringWeights, VietnameseGate};
pub use service::{Detection, DetectionMethod, DetectionPipeline, Translation, Translator};
