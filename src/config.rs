//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 타자 연습 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TajaConfig {
    /// 문장 완료 후 다음 문장으로 넘어가기까지 확인 시간 (ms)
    #[serde(default = "default_confirm_delay_ms")]
    pub confirm_delay_ms: u64,
    /// 다음 키 안내 표시 여부
    #[serde(default = "default_true")]
    pub show_next_key: bool,
    /// 다음 글자 초성이 받침으로 잠시 붙은 상태를 오타로 보지 않음
    #[serde(default = "default_true")]
    pub lookahead: bool,
}

fn default_confirm_delay_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

impl Default for TajaConfig {
    fn default() -> Self {
        Self {
            confirm_delay_ms: default_confirm_delay_ms(),
            show_next_key: default_true(),
            lookahead: default_true(),
        }
    }
}

impl TajaConfig {
    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(self.confirm_delay_ms)
    }
}

/// 설정 파일 경로: ~/.config/taja/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("taja").join("config.json")
}

/// 기본 경로에서 설정 로드
pub fn load_config() -> TajaConfig {
    load_config_from(config_path())
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: impl AsRef<Path>) -> TajaConfig {
    match fs::read_to_string(path.as_ref()) {
        Ok(content) => parse_config(&content),
        Err(_) => TajaConfig::default(),
    }
}

/// 설정 JSON 파싱 (실패 시 기본값)
pub fn parse_config(content: &str) -> TajaConfig {
    serde_json::from_str(content).unwrap_or_else(|e| {
        log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
        TajaConfig::default()
    })
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &TajaConfig) -> Result<(), String> {
    save_config_to(config_path(), config)
}

/// 설정 파일 저장 (상위 디렉토리가 없으면 생성)
pub fn save_config_to(path: impl AsRef<Path>, config: &TajaConfig) -> Result<(), String> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    log::debug!("설정 저장: {}", path.display());
    Ok(())
}
