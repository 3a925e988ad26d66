use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("시트 요청 오류: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("입력 오류: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("엑셀 생성 오류: {0}")]
    ExcelGeneration(String),

    #[error("차량을 찾을 수 없습니다: {0}")]
    VehicleNotFound(String),
}

pub type Result<T> = std::result::Result<T, FleetError>;
