//! 필터 상태와 판정
//!
//! 검색어·컬럼 값 필터·숫자 구간 필터(대여료/보증금/주행거리/차령)를
//! 하나의 불변 상태로 묶고, 레코드 1건에 대한 통과 여부를 판정한다.
//! 모든 조건은 AND 결합이며 활성화되지 않은 조건은 항상 통과한다.

use crate::record::{Record, Term};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// 월 대여료 구간(원). 최상/최하 구간만 한쪽이 열려 있고
/// 나머지는 [하한, 상한) 반개구간이다. 아래 구간들도 동일.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeBucket {
    Under50,
    From50To70,
    From70To100,
    Over100,
}

impl FeeBucket {
    pub const ALL: [FeeBucket; 4] = [
        FeeBucket::Under50,
        FeeBucket::From50To70,
        FeeBucket::From70To100,
        FeeBucket::Over100,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeeBucket::Under50 => "50만원 미만",
            FeeBucket::From50To70 => "50~70만원",
            FeeBucket::From70To100 => "70~100만원",
            FeeBucket::Over100 => "100만원 이상",
        }
    }

    pub fn contains(&self, won: i64) -> bool {
        match self {
            FeeBucket::Under50 => won < 500_000,
            FeeBucket::From50To70 => (500_000..700_000).contains(&won),
            FeeBucket::From70To100 => (700_000..1_000_000).contains(&won),
            FeeBucket::Over100 => won >= 1_000_000,
        }
    }
}

impl std::str::FromStr for FeeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        bucket_from_label(s, &Self::ALL, FeeBucket::label, "대여료 구간")
    }
}

/// 보증금 구간(원)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepositBucket {
    Under100,
    From100To300,
    From300To500,
    Over500,
}

impl DepositBucket {
    pub const ALL: [DepositBucket; 4] = [
        DepositBucket::Under100,
        DepositBucket::From100To300,
        DepositBucket::From300To500,
        DepositBucket::Over500,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DepositBucket::Under100 => "100만원 미만",
            DepositBucket::From100To300 => "100~300만원",
            DepositBucket::From300To500 => "300~500만원",
            DepositBucket::Over500 => "500만원 이상",
        }
    }

    pub fn contains(&self, won: i64) -> bool {
        match self {
            DepositBucket::Under100 => won < 1_000_000,
            DepositBucket::From100To300 => (1_000_000..3_000_000).contains(&won),
            DepositBucket::From300To500 => (3_000_000..5_000_000).contains(&won),
            DepositBucket::Over500 => won >= 5_000_000,
        }
    }
}

impl std::str::FromStr for DepositBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        bucket_from_label(s, &Self::ALL, DepositBucket::label, "보증금 구간")
    }
}

/// 주행거리 구간(km)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MileageBucket {
    Under10k,
    From10kTo30k,
    From30kTo50k,
    From50kTo100k,
    Over100k,
}

impl MileageBucket {
    pub const ALL: [MileageBucket; 5] = [
        MileageBucket::Under10k,
        MileageBucket::From10kTo30k,
        MileageBucket::From30kTo50k,
        MileageBucket::From50kTo100k,
        MileageBucket::Over100k,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MileageBucket::Under10k => "1만km 미만",
            MileageBucket::From10kTo30k => "1~3만km",
            MileageBucket::From30kTo50k => "3~5만km",
            MileageBucket::From50kTo100k => "5~10만km",
            MileageBucket::Over100k => "10만km 이상",
        }
    }

    pub fn contains(&self, km: i64) -> bool {
        match self {
            MileageBucket::Under10k => km < 10_000,
            MileageBucket::From10kTo30k => (10_000..30_000).contains(&km),
            MileageBucket::From30kTo50k => (30_000..50_000).contains(&km),
            MileageBucket::From50kTo100k => (50_000..100_000).contains(&km),
            MileageBucket::Over100k => km >= 100_000,
        }
    }
}

impl std::str::FromStr for MileageBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        bucket_from_label(s, &Self::ALL, MileageBucket::label, "주행거리 구간")
    }
}

/// 차령 구간(년). 경과 일수/365 의 소수 값으로 판정한다
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBucket {
    Under1,
    From1To3,
    From3To5,
    Over5,
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 4] = [
        AgeBucket::Under1,
        AgeBucket::From1To3,
        AgeBucket::From3To5,
        AgeBucket::Over5,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeBucket::Under1 => "1년 미만",
            AgeBucket::From1To3 => "1~3년",
            AgeBucket::From3To5 => "3~5년",
            AgeBucket::Over5 => "5년 이상",
        }
    }

    pub fn contains(&self, years: f64) -> bool {
        match self {
            AgeBucket::Under1 => years < 1.0,
            AgeBucket::From1To3 => (1.0..3.0).contains(&years),
            AgeBucket::From3To5 => (3.0..5.0).contains(&years),
            AgeBucket::Over5 => years >= 5.0,
        }
    }
}

impl std::str::FromStr for AgeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        bucket_from_label(s, &Self::ALL, AgeBucket::label, "차령 구간")
    }
}

/// 라벨 문자열로 구간을 찾는다 (공백 차이는 무시)
fn bucket_from_label<B: Copy>(
    s: &str,
    all: &[B],
    label: fn(&B) -> &'static str,
    kind: &str,
) -> Result<B, String> {
    let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    all.iter()
        .copied()
        .find(|b| label(b).replace(' ', "") == wanted)
        .ok_or_else(|| {
            let labels: Vec<&str> = all.iter().map(label).collect();
            format!("알 수 없는 {}: {}. ({} 중 하나)", kind, s, labels.join(", "))
        })
}

/// 필터 상태. UI가 들고 있다가 파생 계산에 통째로 넘기는 불변 값
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// 통합 검색어. 빈 문자열이면 전체 통과
    pub search: String,
    /// 컬럼별 허용 값 집합. 비어 있는 집합은 제한 없음
    pub columns: HashMap<String, HashSet<String>>,
    pub fee_buckets: HashSet<FeeBucket>,
    pub deposit_buckets: HashSet<DepositBucket>,
    pub mileage_buckets: HashSet<MileageBucket>,
    pub age_buckets: HashSet<AgeBucket>,
    /// 대여료/보증금 구간 필터가 읽는 계약 기간.
    /// 표시 중인 기간 목록의 첫 항목을 호출 측이 명시적으로 넣는다.
    pub reference_term: Term,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 모든 활성 조건을 만족해야 통과 (AND 결합)
    pub fn matches(&self, record: &Record, today: NaiveDate) -> bool {
        self.matches_search(record)
            && self.matches_columns(record)
            && self.matches_fee(record)
            && self.matches_deposit(record)
            && self.matches_mileage(record)
            && self.matches_age(record, today)
    }

    fn matches_search(&self, record: &Record) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        record
            .values()
            .any(|value| value.to_lowercase().contains(&needle))
    }

    fn matches_columns(&self, record: &Record) -> bool {
        self.columns.iter().all(|(column, allowed)| {
            allowed.is_empty() || allowed.contains(record.value_or_empty(column))
        })
    }

    fn matches_fee(&self, record: &Record) -> bool {
        if self.fee_buckets.is_empty() {
            return true;
        }
        let fee = record.rental_fee(self.reference_term);
        self.fee_buckets.iter().any(|b| b.contains(fee))
    }

    fn matches_deposit(&self, record: &Record) -> bool {
        if self.deposit_buckets.is_empty() {
            return true;
        }
        let deposit = record.deposit(self.reference_term);
        self.deposit_buckets.iter().any(|b| b.contains(deposit))
    }

    fn matches_mileage(&self, record: &Record) -> bool {
        if self.mileage_buckets.is_empty() {
            return true;
        }
        let km = record.mileage_km();
        self.mileage_buckets.iter().any(|b| b.contains(km))
    }

    fn matches_age(&self, record: &Record, today: NaiveDate) -> bool {
        if self.age_buckets.is_empty() {
            return true;
        }
        // 등록일이 없거나 해석 불가면 차령 구간 필터에서는 항상 탈락
        match record.age_years(today) {
            Some(years) => self.age_buckets.iter().any(|b| b.contains(years)),
            None => false,
        }
    }
}
