//! 공개 시트 CSV 조회
//!
//! 발행된 스프레드시트를 GET으로 받아 본문 텍스트를 돌려준다.
//! 요청마다 cachebust 파라미터를 붙여 중간 캐시를 우회한다.

use crate::error::Result;
use chrono::Utc;

/// 기본 매물 시트(발행 CSV)
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vREzDg6YIAoZBiSeT58g6sksXFZkILyX0hKJeuQIdfKxWDRgu7SX7epVkuKMjXvp8n10-sNCoWRyJdJ/pub?gid=1259006970&single=true&output=csv";

pub struct SheetClient {
    client: reqwest::Client,
    url: String,
}

impl SheetClient {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.unwrap_or_else(|| DEFAULT_SHEET_URL.to_string()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// 시트 본문을 가져온다. 타임아웃은 두지 않는다
    pub async fn fetch_text(&self) -> Result<String> {
        let url = self.cache_busted_url(Utc::now().timestamp_millis());
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    fn cache_busted_url(&self, millis: i64) -> String {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}cachebust={}", self.url, separator, millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_bust_appends_to_existing_query() {
        let client = SheetClient::new(Some("https://example.com/pub?output=csv".to_string()));
        assert_eq!(
            client.cache_busted_url(1700000000000),
            "https://example.com/pub?output=csv&cachebust=1700000000000"
        );
    }

    #[test]
    fn test_cache_bust_starts_query_when_absent() {
        let client = SheetClient::new(Some("https://example.com/sheet.csv".to_string()));
        assert_eq!(
            client.cache_busted_url(42),
            "https://example.com/sheet.csv?cachebust=42"
        );
    }

    #[test]
    fn test_default_url() {
        let client = SheetClient::new(None);
        assert!(client.url().contains("output=csv"));
    }
}
