//! 설정 파일 로드/저장 (JSON)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detection::ScoringWeights;
use crate::service::ReconcilePolicy;

/// 설정 파일 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("설정 파일 입출력 실패 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("설정 파일 형식 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// langsniff 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LangsniffConfig {
    /// 감지 가중치
    #[serde(default)]
    pub weights: ScoringWeights,
    /// 원격 감지 결과 조합 기준
    #[serde(default)]
    pub policy: ReconcilePolicy,
}

/// 설정 파일 경로: ~/.config/langsniff/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("langsniff").join("config.json")
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> LangsniffConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            LangsniffConfig::default()
        }
        Err(e) => {
            log::warn!("설정 파일을 읽지 못해 기본값 사용: {}", e);
            LangsniffConfig::default()
        }
    }
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<LangsniffConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &LangsniffConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장 (상위 디렉토리 자동 생성)
pub fn save_config_to(config: &LangsniffConfig, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(io_err)?;
    Ok(())
}
