//! 지원 언어 태그
//!
//! 감지기가 반환할 수 있는 언어는 고정된 10개뿐입니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 지원하지 않는 언어 코드/이름
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("지원하지 않는 언어: {0}")]
pub struct UnknownLanguage(pub String);

/// 언어 태그
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "zh-cn")]
    ChineseSimplified,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
}

impl Language {
    /// 지원 언어 수
    pub const COUNT: usize = 10;

    /// 점수 벡터 순회 순서 (동점이면 앞쪽이 이김)
    pub const ALL: [Language; Language::COUNT] = [
        Language::English,
        Language::Vietnamese,
        Language::Japanese,
        Language::Korean,
        Language::ChineseSimplified,
        Language::French,
        Language::German,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
    ];

    /// 신호가 없을 때의 기본 언어
    pub const DEFAULT: Language = Language::English;

    /// 악센트 문자로 구분하는 유럽 언어 (영어 제외)
    pub const EUROPEAN: [Language; 5] = [
        Language::French,
        Language::German,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
    ];

    /// `ALL` 기준 인덱스
    pub fn index(self) -> usize {
        self as usize
    }

    /// 언어 태그 문자열
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Vietnamese => "vi",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::ChineseSimplified => "zh-cn",
            Language::French => "fr",
            Language::German => "de",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
        }
    }

    /// 번역 백엔드용 코드 (zh-cn → zh)
    pub fn backend_code(self) -> &'static str {
        match self {
            Language::ChineseSimplified => "zh",
            other => other.code(),
        }
    }

    /// 영어 이름
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Vietnamese => "Vietnamese",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::ChineseSimplified => "Chinese (Simplified)",
            Language::French => "French",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
        }
    }

    /// 베트남어 UI 라벨 ("Tiếng Anh" 등)
    pub fn vietnamese_label(self) -> &'static str {
        match self {
            Language::English => "Tiếng Anh",
            Language::Vietnamese => "Tiếng Việt",
            Language::Japanese => "Tiếng Nhật",
            Language::Korean => "Tiếng Hàn",
            Language::ChineseSimplified => "Tiếng Trung",
            Language::French => "Tiếng Pháp",
            Language::German => "Tiếng Đức",
            Language::Spanish => "Tiếng Tây Ban Nha",
            Language::Italian => "Tiếng Ý",
            Language::Portuguese => "Tiếng Bồ Đào Nha",
        }
    }

    /// 언어 코드 파싱 (대소문자 무시, `zh`/`zh-CN` 허용)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        match code.as_str() {
            "zh" | "zh-cn" | "zh_cn" | "zh-hans" => Some(Language::ChineseSimplified),
            _ => Self::ALL.into_iter().find(|lang| lang.code() == code),
        }
    }

    /// 언어 이름 파싱 (영어 이름 또는 베트남어 라벨)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|lang| {
            lang.name().eq_ignore_ascii_case(name) || lang.vietnamese_label() == name
        })
    }

    /// 코드 → 이름 순으로 해석, 모두 실패하면 기본 언어
    pub fn resolve(input: &str) -> Self {
        Self::from_code(input)
            .or_else(|| Self::from_name(input))
            .unwrap_or(Self::DEFAULT)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .or_else(|| Self::from_name(s))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
