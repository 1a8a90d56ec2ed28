//! 문자 체계별 문자 수 집계

use crate::core::language::Language;
use crate::core::unicode::{
    is_accent_of, is_cjk_ideograph, is_hangul, is_kana, is_kanji, is_vietnamese_letter,
    is_vietnamese_only_letter,
};

/// 정규화된 텍스트 한 건의 문자 체계별 문자 수
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptCounts {
    /// 베트남어 부호 문자 전체
    pub vietnamese: u32,
    /// 유럽 악센트와 겹치지 않는 베트남어 전용 문자
    pub vietnamese_only: u32,
    /// 히라가나 + 가타카나
    pub kana: u32,
    /// U+4E00 ~ U+9FAF
    pub kanji: u32,
    /// 중국어 한자 범위 전체
    pub cjk: u32,
    pub hangul: u32,
    /// 유럽 언어별 악센트 문자 수 (`Language::index` 기준)
    accents: [u32; Language::COUNT],
}

impl ScriptCounts {
    /// 텍스트를 한 번 순회하며 집계
    pub fn tally(normalized: &str) -> Self {
        let mut counts = Self::default();

        for c in normalized.chars() {
            if is_vietnamese_letter(c) {
                bump(&mut counts.vietnamese);
                if is_vietnamese_only_letter(c) {
                    bump(&mut counts.vietnamese_only);
                }
            }
            if is_kana(c) {
                bump(&mut counts.kana);
            }
            if is_kanji(c) {
                bump(&mut counts.kanji);
            }
            if is_cjk_ideograph(c) {
                bump(&mut counts.cjk);
            }
            if is_hangul(c) {
                bump(&mut counts.hangul);
            }
            for lang in Language::EUROPEAN {
                if is_accent_of(c, lang) {
                    bump(&mut counts.accents[lang.index()]);
                }
            }
        }

        counts
    }

    /// 유럽 언어의 악센트 문자 수 (영어/아시아 언어는 0)
    pub fn accents(&self, lang: Language) -> u32 {
        self.accents[lang.index()]
    }

    /// 유럽 악센트가 하나라도 있는지 확인
    pub fn has_european_accents(&self) -> bool {
        Language::EUROPEAN.iter().any(|&lang| self.accents(lang) > 0)
    }
}

fn bump(counter: &mut u32) {
    *counter = counter.saturating_add(1);
}
