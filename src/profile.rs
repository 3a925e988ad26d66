//! 담당자 정보 저장
//!
//! 전달용 텍스트에 붙는 회사/담당자 정보를 JSON 파일로 보관한다.
//! 원본 화면의 로컬 스토리지와 같은 역할로, 수정할 때마다 저장한다.

use crate::error::{FleetError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 담당자 정보. 필드명이 저장 키 그대로다
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerProfile {
    pub company_name: String,
    pub manager_name: String,
    pub manager_title: String,
    pub phone: String,
    pub include_bank_account: bool,
}

impl ManagerProfile {
    /// 기본 경로에서 읽는다. 파일이 없으면 빈 프로필
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::profile_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let profile: Self = serde_json::from_str(&content)?;
        Ok(profile)
    }

    /// 기본 경로에 저장한다
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::profile_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn profile_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FleetError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("fleet-lease").join("profile.json"))
    }

    /// 아무 필드도 채워지지 않은 상태인지
    pub fn is_unset(&self) -> bool {
        self.company_name.is_empty()
            && self.manager_name.is_empty()
            && self.manager_title.is_empty()
            && self.phone.is_empty()
    }
}
