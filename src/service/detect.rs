//! 원격 감지 결과와 로컬 감지기 조합
//!
//! - 원격 서비스 없음/빈 응답 → 로컬 감지 (`local`)
//! - 원격 서비스 에러 → 로컬 감지 (`local-fallback`)
//! - 원격 신뢰도 낮음 + 로컬 결과가 다르고 강함 → 로컬 감지 (`combined`)
//! - 그 외 → 원격 결과 (`api`)

use serde::{Deserialize, Serialize};

use crate::core::language::Language;
use crate::detection::LanguageScorer;

use super::ServiceError;

/// 원격 감지 서비스가 돌려주는 후보 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageCandidate {
    /// 서비스 측 언어 코드 (`zh` 등)
    pub language: String,
    /// 0.0 ~ 1.0
    pub confidence: f32,
}

impl LanguageCandidate {
    pub fn new(language: impl Into<String>, confidence: f32) -> Self {
        Self {
            language: language.into(),
            confidence,
        }
    }
}

/// 원격 언어 감지 서비스
pub trait RemoteDetector {
    fn detect(&self, text: &str) -> Result<Vec<LanguageCandidate>, ServiceError>;
}

/// 판정 경로
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionMethod {
    /// 원격 서비스 결과 그대로
    Api,
    /// 원격 결과를 로컬 감지로 교정
    Combined,
    /// 로컬 감지
    Local,
    /// 원격 서비스 실패 후 로컬 감지
    LocalFallback,
}

/// 최종 감지 결과
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub language: Language,
    pub confidence: f32,
    pub method: DetectionMethod,
}

/// 원격/로컬 결과 조합 기준
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcilePolicy {
    /// 원격 신뢰도가 이 값 미만이면 로컬 감지로 교차 확인
    pub low_confidence: f32,
    /// `combined` 판정 시 보고할 신뢰도
    pub combined_confidence: f32,
    /// `local` 판정 시 보고할 신뢰도
    pub local_confidence: f32,
    /// `local-fallback` 판정 시 보고할 신뢰도
    pub fallback_confidence: f32,
}

impl Default for ReconcilePolicy {
    fn default() -> Self {
        Self {
            low_confidence: 0.6,
            combined_confidence: 0.7,
            local_confidence: 0.8,
            fallback_confidence: 0.7,
        }
    }
}

/// 원격 감지 + 로컬 감지 파이프라인
pub struct DetectionPipeline {
    remote: Option<Box<dyn RemoteDetector + Send + Sync>>,
    scorer: LanguageScorer,
    policy: ReconcilePolicy,
}

impl DetectionPipeline {
    /// 로컬 감지만 사용하는 파이프라인
    pub fn local(scorer: LanguageScorer, policy: ReconcilePolicy) -> Self {
        Self {
            remote: None,
            scorer,
            policy,
        }
    }

    /// 원격 감지 서비스를 우선 사용하는 파이프라인
    pub fn with_remote(
        remote: impl RemoteDetector + Send + Sync + 'static,
        scorer: LanguageScorer,
        policy: ReconcilePolicy,
    ) -> Self {
        Self {
            remote: Some(Box::new(remote)),
            scorer,
            policy,
        }
    }

    pub fn scorer(&self) -> &LanguageScorer {
        &self.scorer
    }

    /// 텍스트 언어 감지 (항상 결과를 반환)
    pub fn detect(&self, text: &str) -> Detection {
        // 빈 입력은 원격 호출 없이 기본 언어
        if text.trim().is_empty() {
            return self.local_detection(Language::DEFAULT, DetectionMethod::Local);
        }

        let Some(remote) = &self.remote else {
            return self.local_detection(self.scorer.detect(text), DetectionMethod::Local);
        };

        match remote.detect(text) {
            Ok(candidates) => self.reconcile(text, &candidates),
            Err(e) => {
                log::warn!("원격 언어 감지 실패, 로컬 감지 사용: {}", e);
                self.local_detection(self.scorer.detect(text), DetectionMethod::LocalFallback)
            }
        }
    }

    /// 원격 후보 목록과 로컬 감지 결과 조합
    pub fn reconcile(&self, text: &str, candidates: &[LanguageCandidate]) -> Detection {
        let Some(top) = candidates
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
        else {
            log::debug!(
                "{}, 로컬 감지 사용",
                ServiceError::EmptyResponse("후보 없음".into())
            );
            return self.local_detection(self.scorer.detect(text), DetectionMethod::Local);
        };

        let remote_lang = Language::from_code(&top.language);
        if remote_lang.is_none() {
            log::warn!(
                "{}, 로컬 감지로 교차 확인",
                ServiceError::UnsupportedLanguage(top.language.clone())
            );
        }

        if let Some(lang) = remote_lang {
            if top.confidence >= self.policy.low_confidence {
                return Detection {
                    language: lang,
                    confidence: top.confidence,
                    method: DetectionMethod::Api,
                };
            }
        }

        // 신뢰도가 낮거나 지원하지 않는 언어 → 로컬 감지로 교차 확인
        let (local_lang, local_score) = self.scorer.detect_with_score(text);
        let local_strong = local_score >= self.scorer.weights().strong_signal;

        match remote_lang {
            Some(lang) if lang == local_lang || !local_strong => Detection {
                language: lang,
                confidence: top.confidence,
                method: DetectionMethod::Api,
            },
            _ => {
                log::debug!(
                    "원격 결과 {} ({:.2}) 대신 로컬 결과 {} 사용",
                    top.language,
                    top.confidence,
                    local_lang
                );
                Detection {
                    language: local_lang,
                    confidence: self.policy.combined_confidence,
                    method: DetectionMethod::Combined,
                }
            }
        }
    }

    fn local_detection(&self, language: Language, method: DetectionMethod) -> Detection {
        let confidence = match method {
            DetectionMethod::LocalFallback => self.policy.fallback_confidence,
            _ => self.policy.local_confidence,
        };
        Detection {
            language,
            confidence,
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// 고정 응답을 돌려주는 원격 감지기
    struct FixedRemote {
        result: Result<Vec<LanguageCandidate>, String>,
        calls: Arc<AtomicUsize>,
    }

    impl FixedRemote {
        fn ok(candidates: Vec<LanguageCandidate>) -> Self {
            Self {
                result: Ok(candidates),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing() -> Self {
            Self {
                result: Err("connection refused".into()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl RemoteDetector for FixedRemote {
        fn detect(&self, _text: &str) -> Result<Vec<LanguageCandidate>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone().map_err(ServiceError::Unavailable)
        }
    }

    fn pipeline(remote: FixedRemote) -> DetectionPipeline {
        DetectionPipeline::with_remote(remote, LanguageScorer::default(), ReconcilePolicy::default())
    }

    #[test]
    fn test_local_only() {
        let pipeline = DetectionPipeline::local(LanguageScorer::default(), ReconcilePolicy::default());
        let detection = pipeline.detect("xin chào");
        assert_eq!(detection.language, Language::Vietnamese);
        assert_eq!(detection.method, DetectionMethod::Local);
        assert!((detection.confidence - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_blank_skips_remote() {
        let remote = FixedRemote::ok(vec![LanguageCandidate::new("ja", 0.99)]);
        let calls = Arc::clone(&remote.calls);
        let detection = pipeline(remote).detect("   ");

        assert_eq!(detection.language, Language::English);
        assert_eq!(detection.method, DetectionMethod::Local);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_confident_remote_wins() {
        let remote = FixedRemote::ok(vec![
            LanguageCandidate::new("en", 0.2),
            LanguageCandidate::new("zh", 0.9),
        ]);
        let detection = pipeline(remote).detect("hello");

        // zh → zh-cn, 신뢰도 높은 후보 선택
        assert_eq!(detection.language, Language::ChineseSimplified);
        assert_eq!(detection.method, DetectionMethod::Api);
        assert!((detection.confidence - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_low_confidence_overridden_by_strong_local() {
        let remote = FixedRemote::ok(vec![LanguageCandidate::new("fr", 0.4)]);
        let detection = pipeline(remote).detect("こんにちは");

        assert_eq!(detection.language, Language::Japanese);
        assert_eq!(detection.method, DetectionMethod::Combined);
        assert!((detection.confidence - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_low_confidence_kept_when_local_weak() {
        // "quick brown fox" → 로컬 영어 3점 (강한 신호 아님)
        let remote = FixedRemote::ok(vec![LanguageCandidate::new("de", 0.4)]);
        let detection = pipeline(remote).detect("quick brown fox");

        assert_eq!(detection.language, Language::German);
        assert_eq!(detection.method, DetectionMethod::Api);
    }

    #[test]
    fn test_low_confidence_agreeing() {
        let remote = FixedRemote::ok(vec![LanguageCandidate::new("ko", 0.3)]);
        let detection = pipeline(remote).detect("안녕하세요");

        assert_eq!(detection.language, Language::Korean);
        assert_eq!(detection.method, DetectionMethod::Api);
    }

    #[test]
    fn test_unsupported_remote_language() {
        let remote = FixedRemote::ok(vec![LanguageCandidate::new("ru", 0.95)]);
        let detection = pipeline(remote).detect("bonjour");

        assert_eq!(detection.language, Language::French);
        assert_eq!(detection.method, DetectionMethod::Combined);
    }

    #[test]
    fn test_empty_remote_response() {
        let detection = pipeline(FixedRemote::ok(vec![])).detect("hola");
        assert_eq!(detection.language, Language::Spanish);
        assert_eq!(detection.method, DetectionMethod::Local);
    }

    #[test]
    fn test_remote_failure_falls_back() {
        let detection = pipeline(FixedRemote::failing()).detect("danke");
        assert_eq!(detection.language, Language::German);
        assert_eq!(detection.method, DetectionMethod::LocalFallback);
        assert!((detection.confidence - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_detection_json() {
        let detection = Detection {
            language: Language::ChineseSimplified,
            confidence: 0.5,
            method: DetectionMethod::LocalFallback,
        };
        let json = serde_json::to_string(&detection).unwrap();
        assert_eq!(
            json,
            r#"{"language":"zh-cn","confidence":0.5,"method":"local-fallback"}"#
        );
    }

    #[test]
    fn test_candidate_json() {
        let candidates: Vec<LanguageCandidate> =
            serde_json::from_str(r#"[{"language":"vi","confidence":0.87}]"#).unwrap();
        assert_eq!(candidates[0].language, "vi");
    }
}
