//! 입력 정규화와 토큰 분리

use std::sync::LazyLock;

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};

static NFC: LazyLock<ComposingNormalizerBorrowed> = LazyLock::new(ComposingNormalizer::new_nfc);

/// 감지용 정규화: 소문자 → NFC 조합 → 앞뒤 공백 제거
///
/// 결과가 비어 있으면 `None` (신호 없음, 호출자가 기본 언어로 처리).
/// 두 번 적용해도 결과가 같습니다.
pub fn normalize(text: &str) -> Option<String> {
    let lowered = text.to_lowercase();
    let composed = NFC.normalize(&lowered);
    let trimmed = composed.trim();

    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.to_string())
}

/// 공백 기준 토큰 분리 (빈 토큰 제외)
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
