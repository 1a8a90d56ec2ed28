//! 언어 태그, 정규화, 유니코드 범위

pub mod language;
pub mod normalize;
pub mod unicode;
