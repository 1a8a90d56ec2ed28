//! 오프라인 언어 감지 모듈

mod config;
pub mod patterns;
pub mod script;
mod scorer;

pub use config::{ScoringWeights, VietnameseGate};
pub use scorer::{detect_language, LanguageScorer, ScoreVector};
