//! 점수 가중치 설정
//!
//! 스코어링 및 판정에 사용되는 상수를 한곳에 모읍니다.

use serde::{Deserialize, Serialize};

/// 언어 감지 가중치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// 불용어(흔한 단어) 토큰 일치 1건당 점수
    pub word_match: u32,

    /// 문자 체계 범위에 속하는 문자 1개당 점수
    /// (베트남어 부호, 가나, 한글, 중국어 한자, 유럽 악센트)
    pub script_match: u32,

    /// 한자 1개당 일본어 점수
    pub kanji_match: u32,

    /// 악센트 없는 라틴 텍스트에서 라틴 문자 토큰 1개당 영어 점수
    pub latin_word: u32,

    /// 텍스트에 포함된 인사말 구문 1개당 점수
    pub phrase_match: u32,

    /// 강한 신호 임계값
    /// 일본어 점수가 이 값 이상이면(또는 가나가 있으면) 중국어 점수를 주지 않고,
    /// 아시아 문자 점수가 이 값 이상이면 라틴 계열 점수를 계산하지 않음
    pub strong_signal: u32,

    /// 최소 신뢰 점수
    /// 최고 점수가 이 값 미만이면 기본 언어(영어)로 판정
    pub confidence_floor: u32,

    /// 라틴 계열 점수를 닫는 베트남어 신호 기준
    pub vietnamese_gate: VietnameseGate,
}

/// 라틴 계열 점수 차단에 쓰는 베트남어 신호
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VietnameseGate {
    /// 베트남어 부호 문자 전체 점수
    #[default]
    AllLetters,
    /// 유럽 악센트와 겹치지 않는 베트남어 전용 문자(ạ, ơ, ư, đ 등)만
    ExclusiveLetters,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            word_match: 3,
            script_match: 5,
            kanji_match: 3,
            latin_word: 1,
            phrase_match: 10,
            strong_signal: 10,
            confidence_floor: 3,
            vietnamese_gate: VietnameseGate::AllLetters,
        }
    }
}

impl ScoringWeights {
    /// 기본 가중치
    pub fn new() -> Self {
        Self::default()
    }

    /// 단어 일치 가중치 설정
    pub fn with_word_match(mut self, weight: u32) -> Self {
        self.word_match = weight;
        self
    }

    /// 문자 체계 가중치 설정
    pub fn with_script_match(mut self, weight: u32) -> Self {
        self.script_match = weight;
        self
    }

    /// 한자 가중치 설정
    pub fn with_kanji_match(mut self, weight: u32) -> Self {
        self.kanji_match = weight;
        self
    }

    /// 라틴 토큰 가중치 설정
    pub fn with_latin_word(mut self, weight: u32) -> Self {
        self.latin_word = weight;
        self
    }

    /// 구문 일치 가중치 설정
    pub fn with_phrase_match(mut self, weight: u32) -> Self {
        self.phrase_match = weight;
        self
    }

    /// 강한 신호 임계값 설정
    pub fn with_strong_signal(mut self, threshold: u32) -> Self {
        self.strong_signal = threshold;
        self
    }

    /// 최소 신뢰 점수 설정
    pub fn with_confidence_floor(mut self, floor: u32) -> Self {
        self.confidence_floor = floor;
        self
    }

    /// 베트남어 차단 기준 설정
    pub fn with_vietnamese_gate(mut self, gate: VietnameseGate) -> Self {
        self.vietnamese_gate = gate;
        self
    }
}
