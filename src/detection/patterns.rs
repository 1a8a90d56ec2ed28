//! 언어별 단어/구문 데이터
//!
//! 불용어 목록은 토큰 단위 완전 일치, 인사말 구문은 부분 문자열 일치에 사용됩니다.
//! 모든 항목은 정규화된(소문자, NFC) 형태로 적습니다.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::core::language::Language;

/// 언어별 흔한 짧은 단어 목록
pub static LEXICON: LazyLock<HashMap<Language, HashSet<&'static str>>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert(Language::Vietnamese, HashSet::from([
        "và", "hoặc", "không", "là", "có", "được", "trong", "của", "cho", "với",
        "tôi", "bạn", "chúng", "họ", "những", "các", "một", "hai", "ba", "bốn", "năm",
    ]));
    map.insert(Language::English, HashSet::from([
        "the", "and", "or", "not", "is", "are", "in", "of", "to", "for", "with",
        "i", "you", "we", "they", "this", "that", "one", "two", "three", "four", "five",
    ]));
    map.insert(Language::French, HashSet::from([
        "le", "la", "les", "et", "ou", "ne", "pas", "est", "sont", "dans", "de",
        "à", "pour", "avec", "je", "tu", "nous", "ils", "un", "deux", "trois",
    ]));
    map.insert(Language::German, HashSet::from([
        "der", "die", "das", "und", "oder", "nicht", "ist", "sind", "in", "von",
        "zu", "für", "mit", "ich", "du", "wir", "sie", "ein", "zwei", "drei",
    ]));
    map.insert(Language::Spanish, HashSet::from([
        "el", "la", "los", "las", "y", "o", "no", "es", "son", "en", "de", "a",
        "para", "con", "yo", "tú", "nosotros", "ellos", "uno", "dos", "tres",
    ]));
    map.insert(Language::Italian, HashSet::from([
        "il", "la", "i", "le", "e", "o", "non", "è", "sono", "in", "di", "a",
        "per", "con", "io", "tu", "noi", "loro", "uno", "due", "tre",
    ]));
    map.insert(Language::Portuguese, HashSet::from([
        "o", "a", "os", "as", "e", "ou", "não", "é", "são", "em", "de", "para",
        "com", "eu", "tu", "nós", "eles", "um", "dois", "três",
    ]));

    map
});

/// 언어별 대표 인사말 구문
pub static PHRASES: LazyLock<HashMap<Language, Vec<&'static str>>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert(Language::Vietnamese, vec!["xin chào", "cảm ơn", "tạm biệt", "làm ơn", "xin lỗi"]);
    map.insert(Language::English, vec!["hello", "thank you", "goodbye", "please", "sorry"]);
    map.insert(Language::French, vec!["bonjour", "merci", "au revoir", "s'il vous plaît", "pardon"]);
    map.insert(Language::German, vec!["hallo", "danke", "auf wiedersehen", "bitte", "entschuldigung"]);
    map.insert(Language::Spanish, vec!["hola", "gracias", "adiós", "por favor", "lo siento"]);
    map.insert(Language::Japanese, vec!["こんにちは", "ありがとう", "さようなら", "お願いします", "すみません"]);
    map.insert(Language::Korean, vec!["안녕하세요", "감사합니다", "안녕히 가세요", "제발", "죄송합니다"]);
    map.insert(Language::ChineseSimplified, vec!["你好", "谢谢", "再见", "请", "对不起"]);
    map.insert(Language::Italian, vec!["ciao", "grazie", "arrivederci", "per favore", "scusa"]);
    map.insert(Language::Portuguese, vec!["olá", "obrigado", "adeus", "por favor", "desculpe"]);

    map
});

/// 해당 언어의 불용어인지 확인 (목록이 없는 언어는 항상 false)
pub fn is_stopword(lang: Language, token: &str) -> bool {
    LEXICON.get(&lang).is_some_and(|words| words.contains(token))
}

/// 해당 언어의 인사말 구문 목록
pub fn phrases(lang: Language) -> &'static [&'static str] {
    PHRASES.get(&lang).map(Vec::as_slice).unwrap_or(&[])
}
