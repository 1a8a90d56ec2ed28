//! 문자 체계별 유니코드 범위
//!
//! 모든 판별 함수는 정규화(소문자 + NFC)된 문자를 기준으로 합니다.

use super::language::Language;

/// 히라가나: U+3040 ~ U+309F
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}')
}

/// 가타카나: U+30A0 ~ U+30FF
pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}')
}

/// 일본어 가나 (히라가나 또는 가타카나)
pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

/// 일본어 한자로 보는 범위: U+4E00 ~ U+9FAF
pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FAF}')
}

/// 중국어 한자로 보는 범위
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' |  // CJK Unified Ideographs
        '\u{3400}'..='\u{4DBF}' |  // CJK Extension A
        '\u{F900}'..='\u{FAFF}'    // CJK Compatibility Ideographs
    )
}

/// 한글 (완성형 음절, 자모, 호환용 자모, 확장 자모)
pub fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7AF}' |  // 완성형 음절
        '\u{1100}'..='\u{11FF}' |  // 자모
        '\u{3130}'..='\u{318F}' |  // 호환용 자모
        '\u{A960}'..='\u{A97F}' |  // 확장 자모 A
        '\u{D7B0}'..='\u{D7FF}'    // 확장 자모 B
    )
}

/// 베트남어 성조/모음 부호 문자 (소문자)
const VIETNAMESE_LETTERS: &str = "àáạảãâầấậẩẫăằắặẳẵèéẹẻẽêềếệểễìíịỉĩòóọỏõôồốộổỗơờớợởỡùúụủũưừứựửữỳýỵỷỹđ";

const FRENCH_ACCENTS: &str = "éèêëàâäîïôöùûüÿçœæ";
const GERMAN_ACCENTS: &str = "äöüß";
const SPANISH_ACCENTS: &str = "áéíóúüñ¿¡";
const ITALIAN_ACCENTS: &str = "àèéìíîòóùú";
const PORTUGUESE_ACCENTS: &str = "áàâãéêíóôõúç";

/// 베트남어 부호 문자인지 확인
pub fn is_vietnamese_letter(c: char) -> bool {
    VIETNAMESE_LETTERS.contains(c)
}

/// 유럽 언어의 악센트 문자 집합 (영어/아시아 언어는 빈 문자열)
pub fn accent_letters(lang: Language) -> &'static str {
    match lang {
        Language::French => FRENCH_ACCENTS,
        Language::German => GERMAN_ACCENTS,
        Language::Spanish => SPANISH_ACCENTS,
        Language::Italian => ITALIAN_ACCENTS,
        Language::Portuguese => PORTUGUESE_ACCENTS,
        _ => "",
    }
}

/// 해당 언어의 악센트 문자인지 확인
pub fn is_accent_of(c: char, lang: Language) -> bool {
    accent_letters(lang).contains(c)
}

/// 유럽 언어 어디에도 쓰이지 않는 베트남어 전용 문자인지 확인
///
/// ạ, ơ, ư, đ 등. 프랑스어/포르투갈어와 겹치는 à, ô 등은 제외
pub fn is_vietnamese_only_letter(c: char) -> bool {
    is_vietnamese_letter(c)
        && !Language::EUROPEAN
            .iter()
            .any(|&lang| is_accent_of(c, lang))
}

/// ASCII 라틴 문자 (a-z)
pub fn is_ascii_latin(c: char) -> bool {
    c.is_ascii_lowercase()
}
