//! 고정 구문 번역 사전
//!
//! 원격 번역이 모두 실패했을 때 자주 쓰는 인사말만이라도 번역합니다.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::language::Language;
use crate::core::normalize::normalize;

/// 원문 언어 → 구문 → 대상 언어 → 번역문
type Entries = HashMap<Language, HashMap<&'static str, HashMap<Language, &'static str>>>;

/// 인사말 세 개의 언어별 표현 (영어, 베트남어 원문 → 모든 언어)
const GREETINGS: [[(Language, &str); Language::COUNT]; 3] = [
    [
        (Language::English, "hello"),
        (Language::Vietnamese, "xin chào"),
        (Language::French, "bonjour"),
        (Language::German, "hallo"),
        (Language::Japanese, "こんにちは"),
        (Language::Korean, "안녕하세요"),
        (Language::ChineseSimplified, "你好"),
        (Language::Spanish, "hola"),
        (Language::Italian, "ciao"),
        (Language::Portuguese, "olá"),
    ],
    [
        (Language::English, "goodbye"),
        (Language::Vietnamese, "tạm biệt"),
        (Language::French, "au revoir"),
        (Language::German, "auf wiedersehen"),
        (Language::Japanese, "さようなら"),
        (Language::Korean, "안녕히 가세요"),
        (Language::ChineseSimplified, "再见"),
        (Language::Spanish, "adiós"),
        (Language::Italian, "arrivederci"),
        (Language::Portuguese, "adeus"),
    ],
    [
        (Language::English, "thank you"),
        (Language::Vietnamese, "cảm ơn"),
        (Language::French, "merci"),
        (Language::German, "danke"),
        (Language::Japanese, "ありがとう"),
        (Language::Korean, "감사합니다"),
        (Language::ChineseSimplified, "谢谢"),
        (Language::Spanish, "gracias"),
        (Language::Italian, "grazie"),
        (Language::Portuguese, "obrigado"),
    ],
];

/// 영어 ↔ 베트남어 자주 틀리는 표현
const EN_VI_PAIRS: [(&str, &str); 5] = [
    ("you're welcome", "không có gì"),
    ("please", "làm ơn"),
    ("sorry", "xin lỗi"),
    ("i love you", "tôi yêu bạn"),
    ("how are you", "bạn khỏe không"),
];

static BUILTIN: LazyLock<Entries> = LazyLock::new(|| {
    let mut entries: Entries = HashMap::new();

    // 원문 언어는 영어/베트남어만
    for row in GREETINGS {
        for (source, phrase) in row {
            if source != Language::English && source != Language::Vietnamese {
                continue;
            }
            let targets = entries.entry(source).or_default().entry(phrase).or_default();
            for (target, translated) in row {
                if target != source {
                    targets.insert(target, translated);
                }
            }
        }
    }

    for (en, vi) in EN_VI_PAIRS {
        entries
            .entry(Language::English)
            .or_default()
            .entry(en)
            .or_default()
            .insert(Language::Vietnamese, vi);
        entries
            .entry(Language::Vietnamese)
            .or_default()
            .entry(vi)
            .or_default()
            .insert(Language::English, en);
    }

    entries
});

/// 고정 구문 사전
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseDictionary;

impl PhraseDictionary {
    /// 사전 번역
    ///
    /// 입력 전체가 구문과 같으면 번역문을, 구문 + 공백으로 시작하면
    /// 앞부분만 바꾸고 나머지는 원문 그대로 붙여 반환합니다.
    pub fn lookup(&self, text: &str, source: Language, target: Language) -> Option<String> {
        let normalized = normalize(text)?;
        let original = text.trim();

        if let Some(translated) = Self::exact(&normalized, source, target) {
            return Some(translated.to_string());
        }

        BUILTIN
            .get(&source)?
            .iter()
            .filter_map(|(&phrase, targets)| {
                let translated = targets.get(&target)?;
                let rest = normalized.strip_prefix(phrase)?;
                if !rest.starts_with(' ') {
                    return None;
                }
                // 원문의 대소문자를 살리기 위해, 정규화 결과가 구문과 같아지는
                // 첫 공백 위치에서 원문을 자름 (NFC 조합으로 문자 수가 달라질 수 있음)
                let split = original
                    .char_indices()
                    .filter(|(_, c)| c.is_whitespace())
                    .map(|(i, _)| i)
                    .find(|&i| normalize(&original[..i]).as_deref() == Some(phrase))?;
                Some((phrase.len(), format!("{}{}", translated, &original[split..])))
            })
            // 가장 긴 구문 우선
            .max_by_key(|(len, _)| *len)
            .map(|(_, translated)| translated)
    }

    /// 정규화된 텍스트와 완전히 일치하는 구문 번역
    pub fn exact(normalized: &str, source: Language, target: Language) -> Option<&'static str> {
        BUILTIN
            .get(&source)
            .and_then(|phrases| phrases.get(normalized))
            .and_then(|targets| targets.get(&target))
            .copied()
    }
}
