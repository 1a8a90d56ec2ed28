//! 외부 서비스 연동 계층
//!
//! 원격 감지/번역 서비스는 트레이트로만 받고, 실패 시 로컬 감지기와
//! 고정 구문 사전으로 대체합니다. 네트워크 구현은 포함하지 않습니다.

mod detect;
mod dictionary;
mod translate;

use thiserror::Error;

pub use detect::{
    Detection, DetectionMethod, DetectionPipeline, LanguageCandidate, ReconcilePolicy,
    RemoteDetector,
};
pub use dictionary::PhraseDictionary;
pub use translate::{Translation, TranslationBackend, TranslationMethod, Translator};

/// 외부 서비스 호출 에러
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 서비스 연결 실패
    #[error("서비스 사용 불가: {0}")]
    Unavailable(String),
    /// 응답은 왔지만 쓸 수 있는 결과가 없음
    #[error("빈 응답: {0}")]
    EmptyResponse(String),
    /// 서비스가 지원하지 않는 언어 조합
    #[error("지원하지 않는 언어: {0}")]
    UnsupportedLanguage(String),
}
