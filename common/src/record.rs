//! 매물 레코드 타입
//!
//! 시트의 1행을 컬럼명 → 문자열 값의 삽입 순서 보존 매핑으로 표현한다.
//! 스키마를 고정하지 않고 보관하되, 파생 로직이 의존하는 기지 컬럼은
//! 타입 있는 접근자로 노출한다(값이 없으면 빈 문자열/0으로 완만하게 처리).

use crate::value::{age_years, parse_amount, parse_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 기지 컬럼명(시트 헤더 표기 그대로)
pub mod columns {
    pub const VEHICLE_NO: &str = "차량_번호";
    pub const STATUS: &str = "차량_상태";
    pub const CATEGORY: &str = "차량_구분";
    pub const MAKER: &str = "차량_제조사";
    pub const MODEL: &str = "차량_모델명";
    pub const REGISTERED_AT: &str = "차량_등록일";
    pub const MILEAGE: &str = "차량_주행거리";
}

/// 계약 기간(개월) — 대여료/보증금 컬럼을 결정하는 파라미터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Term {
    #[default]
    M36,
    M48,
    M60,
}

impl Term {
    pub const ALL: [Term; 3] = [Term::M36, Term::M48, Term::M60];

    /// 개월 수
    pub fn months(&self) -> u32 {
        match self {
            Term::M36 => 36,
            Term::M48 => 48,
            Term::M60 => 60,
        }
    }

    /// 화면 표기
    pub fn label(&self) -> String {
        format!("{}개월", self.months())
    }

    /// 대여료 컬럼명 (예: 금액_대여료_36M)
    pub fn fee_column(&self) -> String {
        format!("금액_대여료_{}M", self.months())
    }

    /// 보증금 컬럼명 (예: 금액_보증금_36M)
    pub fn deposit_column(&self) -> String {
        format!("금액_보증금_{}M", self.months())
    }
}

impl std::str::FromStr for Term {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches("개월").trim_end_matches(['m', 'M']) {
            "36" => Ok(Term::M36),
            "48" => Ok(Term::M48),
            "60" => Ok(Term::M60),
            _ => Err(format!("알 수 없는 계약 기간: {}. 36/48/60 중 하나", s)),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.months())
    }
}

/// 시트 1행. 컬럼명 → 값, 헤더 순서 유지
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// 값을 설정한다. 같은 컬럼명이 이미 있으면 자리 그대로 덮어쓴다
    /// (중복 헤더 시 뒤의 값이 앞의 값을 대체하는 시트 동작과 동일).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 값이 없는 컬럼은 빈 문자열로 취급한다
    pub fn value_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =============================================
    // 기지 컬럼 접근자
    // =============================================

    pub fn vehicle_no(&self) -> &str {
        self.value_or_empty(columns::VEHICLE_NO)
    }

    pub fn status(&self) -> &str {
        self.value_or_empty(columns::STATUS)
    }

    pub fn category(&self) -> &str {
        self.value_or_empty(columns::CATEGORY)
    }

    pub fn maker(&self) -> &str {
        self.value_or_empty(columns::MAKER)
    }

    pub fn model(&self) -> &str {
        self.value_or_empty(columns::MODEL)
    }

    /// 주행거리(km). 파싱 불가 시 0
    pub fn mileage_km(&self) -> i64 {
        parse_amount(self.value_or_empty(columns::MILEAGE))
    }

    /// 최초 등록일. 누락/형식 오류 시 None
    pub fn registered_at(&self) -> Option<NaiveDate> {
        parse_date(self.value_or_empty(columns::REGISTERED_AT))
    }

    /// 차령(년). 등록일이 없으면 None
    pub fn age_years(&self, today: NaiveDate) -> Option<f64> {
        self.registered_at().map(|date| age_years(date, today))
    }

    /// 해당 기간의 월 대여료(원). 누락/파싱 불가 시 0
    pub fn rental_fee(&self, term: Term) -> i64 {
        parse_amount(self.value_or_empty(&term.fee_column()))
    }

    /// 해당 기간의 보증금(원). 누락/파싱 불가 시 0
    pub fn deposit(&self, term: Term) -> i64 {
        parse_amount(self.value_or_empty(&term.deposit_column()))
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
