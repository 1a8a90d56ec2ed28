//! 다중 신호 언어 감지
//!
//! 문자 체계, 불용어, 인사말 구문 점수를 합산해 가장 가능성 높은 언어를 고릅니다.
//!
//! 평가 순서:
//! 1. 문자 체계 점수 (베트남어, 일본어, 한국어, 중국어)
//! 2. 아시아 문자 신호가 약할 때만 라틴 계열 점수 (불용어, 악센트, 영어 라틴 토큰)
//! 3. 인사말 구문 점수
//! 4. 최고 점수 판정 (최소 신뢰 점수 미만이면 영어)

use std::fmt;

use crate::core::language::Language;
use crate::core::normalize::{normalize, tokenize};
use crate::core::unicode::is_ascii_latin;

use super::config::{ScoringWeights, VietnameseGate};
use super::patterns::{is_stopword, phrases};
use super::script::ScriptCounts;

/// 감지 1회 분량의 언어별 누적 점수
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreVector {
    scores: [u32; Language::COUNT],
}

impl ScoreVector {
    /// 점수 조회
    pub fn get(&self, lang: Language) -> u32 {
        self.scores[lang.index()]
    }

    fn add(&mut self, lang: Language, points: u32) {
        let slot = &mut self.scores[lang.index()];
        *slot = slot.saturating_add(points);
    }

    /// `Language::ALL` 순서로 (언어, 점수) 순회
    pub fn iter(&self) -> impl Iterator<Item = (Language, u32)> + '_ {
        Language::ALL.into_iter().map(|lang| (lang, self.get(lang)))
    }

    /// 최고 점수 언어 (동점이면 순회 순서상 먼저 나온 언어)
    pub fn best(&self) -> (Language, u32) {
        let mut best = (Language::DEFAULT, 0);
        for (lang, score) in self.iter() {
            if score > best.1 {
                best = (lang, score);
            }
        }
        best
    }
}

impl fmt::Display for ScoreVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (lang, score) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{lang}={score}")?;
            first = false;
        }
        Ok(())
    }
}

/// 오프라인 언어 감지기
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageScorer {
    weights: ScoringWeights,
}

impl LanguageScorer {
    /// 가중치를 지정하여 감지기 생성
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// 기본 가중치로 생성
    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default())
    }

    /// 현재 가중치
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// 텍스트의 언어 판정
    pub fn detect(&self, text: &str) -> Language {
        self.detect_with_score(text).0
    }

    /// 판정 언어와 그 점수 (점수가 최소 신뢰 점수 미만이면 영어, 점수는 그대로)
    pub fn detect_with_score(&self, text: &str) -> (Language, u32) {
        let scores = self.score(text);
        let (lang, score) = scores.best();

        if score < self.weights.confidence_floor {
            log::debug!("신호 약함 ({lang}={score}), 기본 언어로 판정");
            return (Language::DEFAULT, score);
        }

        log::debug!("언어 판정: {lang} (점수 {score})");
        (lang, score)
    }

    /// 언어별 점수 계산 (빈 입력은 모두 0)
    pub fn score(&self, text: &str) -> ScoreVector {
        let mut scores = ScoreVector::default();
        let Some(normalized) = normalize(text) else {
            return scores;
        };

        let w = &self.weights;
        let counts = ScriptCounts::tally(&normalized);

        // 1. 문자 체계
        let vietnamese = counts.vietnamese.saturating_mul(w.script_match);
        let korean = counts.hangul.saturating_mul(w.script_match);
        let kana = counts.kana;
        let japanese = kana
            .saturating_mul(w.script_match)
            .saturating_add(counts.kanji.saturating_mul(w.kanji_match));

        // 가나가 있거나 일본어 신호가 강하면 한자를 중국어로 중복 집계하지 않음
        let chinese_suppressed = kana > 0 || japanese >= w.strong_signal;
        let chinese = if chinese_suppressed {
            0
        } else {
            counts.cjk.saturating_mul(w.script_match)
        };

        scores.add(Language::Vietnamese, vietnamese);
        scores.add(Language::Japanese, japanese);
        scores.add(Language::Korean, korean);
        scores.add(Language::ChineseSimplified, chinese);

        // 2. 라틴 계열 (아시아 문자 신호가 강하면 생략)
        let vietnamese_gate = match w.vietnamese_gate {
            VietnameseGate::AllLetters => vietnamese,
            VietnameseGate::ExclusiveLetters => counts.vietnamese_only.saturating_mul(w.script_match),
        };
        let latin_open = [vietnamese_gate, japanese, korean, chinese]
            .iter()
            .all(|&score| score < w.strong_signal);

        let mut latin_tokens = 0u32;
        for token in tokenize(&normalized) {
            if token.chars().any(is_ascii_latin) {
                latin_tokens = latin_tokens.saturating_add(1);
            }
            for lang in Language::ALL {
                if lang != Language::Vietnamese && !latin_open {
                    continue;
                }
                if is_stopword(lang, token) {
                    scores.add(lang, w.word_match);
                }
            }
        }

        if latin_open {
            for lang in Language::EUROPEAN {
                scores.add(lang, counts.accents(lang).saturating_mul(w.script_match));
            }
            // 악센트가 전혀 없는 라틴 텍스트는 영어 쪽으로 기움
            if !counts.has_european_accents() {
                scores.add(Language::English, latin_tokens.saturating_mul(w.latin_word));
            }
        }

        // 3. 인사말 구문 (같은 구문은 여러 번 나와도 한 번만)
        for lang in Language::ALL {
            if lang == Language::ChineseSimplified && chinese_suppressed {
                continue;
            }
            for phrase in phrases(lang) {
                if normalized.contains(phrase) {
                    scores.add(lang, w.phrase_match);
                }
            }
        }

        log::trace!("점수: {scores} (입력 {:?})", normalized);
        scores
    }
}

/// 기본 가중치로 텍스트 언어 판정
///
/// 모든 입력에 대해 지원 언어 중 하나를 반환합니다. 빈 입력이나 약한 신호는 영어.
///
/// # Examples
/// ```
/// use langsniff::{detect_language, Language};
///
/// assert_eq!(detect_language("xin chào"), Language::Vietnamese);
/// assert_eq!(detect_language("こんにちは"), Language::Japanese);
/// assert_eq!(detect_language("   "), Language::English);
/// ```
pub fn detect_language(text: &str) -> Language {
    LanguageScorer::with_defaults().detect(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_english() {
        assert_eq!(detect_language(""), Language::English);
        assert_eq!(detect_language("   "), Language::English);
        assert_eq!(LanguageScorer::with_defaults().score(""), ScoreVector::default());
    }

    #[test]
    fn test_greetings() {
        assert_eq!(detect_language("xin chào"), Language::Vietnamese);
        assert_eq!(detect_language("hello"), Language::English);
        assert_eq!(detect_language("こんにちは"), Language::Japanese);
        assert_eq!(detect_language("안녕하세요"), Language::Korean);
        assert_eq!(detect_language("你好"), Language::ChineseSimplified);
        assert_eq!(detect_language("bonjour"), Language::French);
        assert_eq!(detect_language("danke schön"), Language::German);
        assert_eq!(detect_language("gracias"), Language::Spanish);
        assert_eq!(detect_language("ciao"), Language::Italian);
        assert_eq!(detect_language("obrigado"), Language::Portuguese);
    }

    #[test]
    fn test_phrase_score() {
        let scores = LanguageScorer::with_defaults().score("xin chào");
        // à 1개 (5) + 구문 (10)
        assert_eq!(scores.get(Language::Vietnamese), 15);
        // à는 프랑스어/이탈리아어/포르투갈어 악센트이기도 함
        assert_eq!(scores.get(Language::French), 5);
        assert_eq!(scores.get(Language::English), 0);
    }

    #[test]
    fn test_sentences() {
        assert_eq!(detect_language("The cat is on the table"), Language::English);
        assert_eq!(detect_language("Der Hund ist nicht hier"), Language::German);
        assert_eq!(detect_language("le chat est sur la table"), Language::French);
        assert_eq!(detect_language("el perro y el gato"), Language::Spanish);
        assert_eq!(detect_language("io sono qui con te"), Language::Italian);
        assert_eq!(detect_language("eu não sei"), Language::Portuguese);
        assert_eq!(detect_language("tôi là sinh viên"), Language::Vietnamese);
        assert_eq!(detect_language("我爱你"), Language::ChineseSimplified);
        assert_eq!(detect_language("東京の大学に行きます"), Language::Japanese);
    }

    #[test]
    fn test_kana_suppresses_chinese() {
        let scorer = LanguageScorer::with_defaults();

        // 가나 1 (5) + 한자 1 (3) → 일본어 8점, 가나가 있으므로 중국어 구문 "请"도 무시
        let scores = scorer.score("请ね");
        assert_eq!(scores.get(Language::Japanese), 8);
        assert_eq!(scores.get(Language::ChineseSimplified), 0);
        assert_eq!(scorer.detect("请ね"), Language::Japanese);

        // 확장 A 한자는 일본어 점수에 들어가지 않지만 가나가 있으면 중국어도 아님
        let scores = scorer.score("ね㐀㐀");
        assert_eq!(scores.get(Language::Japanese), 5);
        assert_eq!(scores.get(Language::ChineseSimplified), 0);
        assert_eq!(scorer.detect("ね㐀㐀"), Language::Japanese);
    }

    #[test]
    fn test_short_kanji_is_chinese() {
        let scores = LanguageScorer::with_defaults().score("你好");
        // 한자 2개 × 3 → 일본어 6점 (강한 신호 아님)
        assert_eq!(scores.get(Language::Japanese), 6);
        // 한자 2개 (10) + 구문 (10)
        assert_eq!(scores.get(Language::ChineseSimplified), 20);
        assert_eq!(detect_language("你好"), Language::ChineseSimplified);
    }

    #[test]
    fn test_kanji_only_text_is_japanese() {
        let scorer = LanguageScorer::with_defaults();

        // 한자 4개 × 3 = 12 → 일본어 강한 신호, 중국어 점수 없음
        let scores = scorer.score("東京大学");
        assert_eq!(scores.get(Language::Japanese), 12);
        assert_eq!(scores.get(Language::ChineseSimplified), 0);
        assert_eq!(scorer.detect("東京大学"), Language::Japanese);
        assert_eq!(scorer.detect("日本国憲法"), Language::Japanese);
    }

    #[test]
    fn test_kanji_weight_is_configurable() {
        let scorer = LanguageScorer::new(ScoringWeights::default().with_kanji_match(0));
        assert_eq!(scorer.score("東京大学").get(Language::Japanese), 0);
        assert_eq!(scorer.detect("東京大学"), Language::ChineseSimplified);
    }

    #[test]
    fn test_vietnamese_score_closes_latin_scoring() {
        // à, ô, é, ê → 베트남어 20점, 라틴 계열 점수 계산 안 함
        let scores = LanguageScorer::with_defaults().score("à côté de la fenêtre");
        assert_eq!(scores.get(Language::Vietnamese), 20);
        assert_eq!(scores.get(Language::French), 0);
        assert_eq!(scores.best().0, Language::Vietnamese);
    }

    #[test]
    fn test_exclusive_letters_gate() {
        let weights = ScoringWeights::default().with_vietnamese_gate(VietnameseGate::ExclusiveLetters);
        let scorer = LanguageScorer::new(weights);

        // 모두 프랑스어 악센트이기도 하므로 라틴 계열 점수가 열림
        let scores = scorer.score("à côté de la fenêtre");
        assert_eq!(scores.get(Language::Vietnamese), 20);
        // 악센트 4개 (20) + 불용어 à, de, la (9)
        assert_eq!(scores.get(Language::French), 29);
        assert_eq!(scorer.detect("à côté de la fenêtre"), Language::French);

        // 베트남어 전용 문자(ơ, ư)가 강하면 그대로 차단
        let scores = scorer.score("cơ sở dữ liệu và");
        assert_eq!(scores.get(Language::French), 0);
    }

    #[test]
    fn test_asian_script_closes_latin_scoring() {
        let scores = LanguageScorer::with_defaults().score("안녕하세요 the is");
        assert_eq!(scores.get(Language::English), 0);
        assert_eq!(scores.best().0, Language::Korean);
    }

    #[test]
    fn test_plain_latin_leans_english() {
        let scorer = LanguageScorer::with_defaults();
        let scores = scorer.score("quick brown fox");
        assert_eq!(scores.get(Language::English), 3);
        assert_eq!(scorer.detect("quick brown fox"), Language::English);
    }

    #[test]
    fn test_weak_signal_defaults_to_english() {
        let scorer = LanguageScorer::with_defaults();
        // 라틴 토큰 1개 → 1점, 최소 신뢰 점수 미만
        assert_eq!(scorer.detect_with_score("xyz"), (Language::English, 1));
        // 숫자/기호만 있으면 신호 없음
        assert_eq!(scorer.detect_with_score("12345 !!"), (Language::English, 0));
        // 악센트 하나 (5점)는 최소 신뢰 점수를 넘음
        assert_eq!(scorer.detect("ñ"), Language::Spanish);
    }

    #[test]
    fn test_floor_discards_leader() {
        let weights = ScoringWeights::default().with_confidence_floor(50);
        let scorer = LanguageScorer::new(weights);
        assert_eq!(scorer.detect("こんにちは"), Language::English);
    }

    #[test]
    fn test_tie_break_by_order() {
        // "por favor"는 스페인어/포르투갈어 공통 → 순서상 스페인어
        let scores = LanguageScorer::with_defaults().score("por favor");
        assert_eq!(scores.get(Language::Spanish), scores.get(Language::Portuguese));
        assert_eq!(detect_language("por favor"), Language::Spanish);
    }

    #[test]
    fn test_phrase_counted_once() {
        let scorer = LanguageScorer::with_defaults();
        assert_eq!(scorer.score("merci").get(Language::French), 10);
        assert_eq!(scorer.score("merci merci").get(Language::French), 10);
        assert_eq!(scorer.score("hola hola hola").get(Language::Spanish), 10);
    }

    #[test]
    fn test_distinct_phrases_accumulate() {
        let scores = LanguageScorer::with_defaults().score("merci pardon");
        assert_eq!(scores.get(Language::French), 20);
    }

    #[test]
    fn test_stopwords_are_whole_tokens() {
        let scores = LanguageScorer::with_defaults().score("theory");
        // "the"가 포함되어 있지만 토큰 일치가 아니므로 불용어 점수 없음
        assert_eq!(scores.get(Language::English), 1);
    }

    #[test]
    fn test_decomposed_input() {
        // NFD 입력도 조합 후 판정
        assert_eq!(detect_language("xin cha\u{300}o"), Language::Vietnamese);
    }

    #[test]
    fn test_score_vector_display() {
        let scores = LanguageScorer::with_defaults().score("hello");
        assert_eq!(
            scores.to_string(),
            "en=11 vi=0 ja=0 ko=0 zh-cn=0 fr=0 de=0 es=0 it=0 pt=0"
        );
    }
}
