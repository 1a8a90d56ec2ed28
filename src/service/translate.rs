//! 번역 폴백 체인
//!
//! 원격 번역 백엔드 (등록 순서대로) → 고정 구문 사전 → 원문 그대로

use std::fmt;

use serde::Serialize;

use crate::core::language::Language;
use crate::detection::LanguageScorer;

use super::dictionary::PhraseDictionary;
use super::ServiceError;

/// 원격 번역 서비스
pub trait TranslationBackend {
    /// 로그/결과 표시용 이름
    fn name(&self) -> &str;

    /// 번역 결과가 없으면 `Ok(None)`
    fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<Option<String>, ServiceError>;
}

/// 번역 경로
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationMethod {
    /// 원문/대상 언어가 같아 그대로 반환
    Identity,
    /// 원격 백엔드 (이름)
    Backend(String),
    /// 고정 구문 사전
    Dictionary,
    /// 모든 경로 실패, 원문 반환
    Original,
}

impl fmt::Display for TranslationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationMethod::Identity => f.write_str("identity"),
            TranslationMethod::Backend(name) => f.write_str(name),
            TranslationMethod::Dictionary => f.write_str("dictionary"),
            TranslationMethod::Original => f.write_str("original"),
        }
    }
}

/// 번역 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub text: String,
    pub source: Language,
    pub target: Language,
    pub method: TranslationMethod,
}

/// 폴백 체인 번역기
pub struct Translator {
    backends: Vec<Box<dyn TranslationBackend + Send + Sync>>,
    dictionary: PhraseDictionary,
    scorer: LanguageScorer,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(LanguageScorer::default())
    }
}

impl Translator {
    /// 백엔드 없이 사전/원문 폴백만 쓰는 번역기
    pub fn new(scorer: LanguageScorer) -> Self {
        Self {
            backends: Vec::new(),
            dictionary: PhraseDictionary,
            scorer,
        }
    }

    /// 백엔드 추가 (먼저 추가한 백엔드를 먼저 시도)
    pub fn with_backend(mut self, backend: impl TranslationBackend + Send + Sync + 'static) -> Self {
        self.backends.push(Box::new(backend));
        self
    }

    /// 번역
    ///
    /// `source`가 `None`이면 로컬 감지기로 원문 언어를 판정합니다.
    /// 어떤 경우에도 결과를 반환하며, 모든 경로가 실패하면 원문을 그대로 돌려줍니다.
    pub fn translate(&self, text: &str, source: Option<Language>, target: Language) -> Translation {
        let source = source.unwrap_or_else(|| self.scorer.detect(text));
        let result = |text: String, method| Translation {
            text,
            source,
            target,
            method,
        };

        if text.trim().is_empty() {
            return result(String::new(), TranslationMethod::Original);
        }

        if source == target {
            return result(text.to_string(), TranslationMethod::Identity);
        }

        for backend in &self.backends {
            let outcome = backend.translate(text, source, target).and_then(|translated| {
                translated
                    .filter(|t| !t.trim().is_empty())
                    .ok_or_else(|| ServiceError::EmptyResponse(format!("{source} → {target}")))
            });
            match outcome {
                Ok(translated) => {
                    return result(translated, TranslationMethod::Backend(backend.name().to_string()));
                }
                Err(e) => {
                    log::warn!("{} 번역 실패: {}", backend.name(), e);
                }
            }
        }

        if let Some(translated) = self.dictionary.lookup(text, source, target) {
            log::debug!("사전 번역 사용 ({} → {})", source, target);
            return result(translated, TranslationMethod::Dictionary);
        }

        log::warn!("번역 경로 모두 실패, 원문 반환 ({} → {})", source, target);
        result(text.to_string(), TranslationMethod::Original)
    }
}
