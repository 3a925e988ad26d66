//! 필드 값 해석 유틸
//!
//! 시트 셀은 전부 문자열이므로 금액·주행거리·날짜를 여기서 한 번에
//! 숫자/날짜로 강제 변환한다. 실패는 오류가 아니라 중립값(0, None)이다.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_DIGIT_RE: Regex = Regex::new(r"[^0-9]").unwrap();
    // 2021.03.15 / 2021-03-15 양쪽 표기를 허용
    static ref DATE_RE: Regex = Regex::new(r"^(\d{4})[.\-](\d{1,2})[.\-](\d{1,2})$").unwrap();
}

/// 숫자 이외의 문자를 전부 제거한 뒤 정수로 해석한다.
/// "550,000원" → 550000, "3.2만km" → 32, 빈 문자열/해석 불가 → 0
pub fn parse_amount(text: &str) -> i64 {
    NON_DIGIT_RE.replace_all(text, "").parse().unwrap_or(0)
}

/// 등록일 문자열을 날짜로 해석한다. 점/대시 구분 YYYY.MM.DD 형식만 인정
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(text.trim())?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// 차령(년) = 경과 일수 / 365. 고정 365일 연도를 사용한다(윤년 미보정).
pub fn age_years(date: NaiveDate, today: NaiveDate) -> f64 {
    (today - date).num_days() as f64 / 365.0
}
