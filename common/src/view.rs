//! 파생 뷰 엔진
//!
//! 레코드 집합 + 필터 상태 + 정렬 상태 → 화면에 보일 시퀀스.
//! 입력을 변경하지 않는 순수 계산이며, 입력이 바뀔 때마다 다시 호출한다.

use crate::filter::FilterState;
use crate::record::{columns, Record};
use crate::value::parse_amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 정렬 방향. 새 컬럼 선택 시 내림차순부터 시작한다
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Descending,
    Ascending,
}

/// 정렬 상태. 키가 없으면 입력 순서 그대로
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 컬럼 헤더 클릭 동작: 없음 → 내림차순 → 오름차순 → 없음.
    /// 다른 컬럼을 누르면 그 컬럼의 내림차순으로 재시작한다.
    pub fn toggle(&mut self, key: &str) {
        match (self.key.as_deref(), self.direction) {
            (Some(current), SortDirection::Descending) if current == key => {
                self.direction = SortDirection::Ascending;
            }
            (Some(current), SortDirection::Ascending) if current == key => {
                self.key = None;
                self.direction = SortDirection::Descending;
            }
            _ => {
                self.key = Some(key.to_string());
                self.direction = SortDirection::Descending;
            }
        }
    }
}

/// 숫자로 비교할 컬럼인지. 주행거리와 금액 계열 컬럼이 해당한다
pub fn is_numeric_column(name: &str) -> bool {
    name == columns::MILEAGE || name.starts_with("금액")
}

/// 필터 → 정렬 순서로 적용해 새 시퀀스를 만든다.
/// `today`는 차령 계산 기준일로, 호출 측이 명시적으로 넘긴다.
pub fn compute(
    records: &[Record],
    filter: &FilterState,
    sort: &SortState,
    today: NaiveDate,
) -> Vec<Record> {
    let mut rows: Vec<Record> = records
        .iter()
        .filter(|record| filter.matches(record, today))
        .cloned()
        .collect();

    if let Some(key) = sort.key.as_deref() {
        let numeric = is_numeric_column(key);
        rows.sort_by(|a, b| {
            let ordering = if numeric {
                parse_amount(a.value_or_empty(key)).cmp(&parse_amount(b.value_or_empty(key)))
            } else {
                a.value_or_empty(key).cmp(b.value_or_empty(key))
            };
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::MileageBucket;

    fn record(fields: &[(&str, &str)]) -> Record {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn fleet() -> Vec<Record> {
        vec![
            record(&[
                (columns::VEHICLE_NO, "11가1111"),
                (columns::MODEL, "그랜저 GN7"),
                (columns::MILEAGE, "48,000km"),
            ]),
            record(&[
                (columns::VEHICLE_NO, "22나2222"),
                (columns::MODEL, "아반떼 CN7"),
                (columns::MILEAGE, "12,000km"),
            ]),
            record(&[
                (columns::VEHICLE_NO, "33다3333"),
                (columns::MODEL, "카니발 KA4"),
                (columns::MILEAGE, "측정불가"),
            ]),
        ]
    }

    // =============================================
    // 정렬 토글
    // =============================================

    #[test]
    fn test_toggle_tri_state() {
        let mut sort = SortState::new();

        sort.toggle(columns::MILEAGE);
        assert_eq!(sort.key.as_deref(), Some(columns::MILEAGE));
        assert_eq!(sort.direction, SortDirection::Descending);

        sort.toggle(columns::MILEAGE);
        assert_eq!(sort.direction, SortDirection::Ascending);

        sort.toggle(columns::MILEAGE);
        assert_eq!(sort.key, None);
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn test_toggle_other_key_restarts_descending() {
        let mut sort = SortState::new();
        sort.toggle(columns::MILEAGE);
        sort.toggle(columns::MILEAGE); // 오름차순 상태에서

        sort.toggle(columns::MODEL);
        assert_eq!(sort.key.as_deref(), Some(columns::MODEL));
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    // =============================================
    // 파생 계산
    // =============================================

    #[test]
    fn test_compute_without_sort_keeps_input_order() {
        let records = fleet();
        let rows = compute(&records, &FilterState::new(), &SortState::new(), today());

        let nos: Vec<&str> = rows.iter().map(|r| r.vehicle_no()).collect();
        assert_eq!(nos, ["11가1111", "22나2222", "33다3333"]);
    }

    #[test]
    fn test_compute_does_not_mutate_input() {
        let records = fleet();
        let mut sort = SortState::new();
        sort.toggle(columns::MILEAGE);

        let _ = compute(&records, &FilterState::new(), &sort, today());
        assert_eq!(records[0].vehicle_no(), "11가1111");
    }

    #[test]
    fn test_numeric_sort_descending_unparseable_as_zero() {
        let records = vec![
            record(&[(columns::VEHICLE_NO, "a"), (columns::MILEAGE, "100")]),
            record(&[(columns::VEHICLE_NO, "b"), (columns::MILEAGE, "20")]),
            record(&[(columns::VEHICLE_NO, "c"), (columns::MILEAGE, "측정불가")]),
        ];
        let sort = SortState {
            key: Some(columns::MILEAGE.to_string()),
            direction: SortDirection::Descending,
        };

        let rows = compute(&records, &FilterState::new(), &sort, today());
        let nos: Vec<&str> = rows.iter().map(|r| r.vehicle_no()).collect();
        // 해석 불가(0)는 맨 뒤
        assert_eq!(nos, ["a", "b", "c"]);
    }

    #[test]
    fn test_numeric_sort_ascending() {
        let records = fleet();
        let sort = SortState {
            key: Some(columns::MILEAGE.to_string()),
            direction: SortDirection::Ascending,
        };

        let rows = compute(&records, &FilterState::new(), &sort, today());
        let nos: Vec<&str> = rows.iter().map(|r| r.vehicle_no()).collect();
        assert_eq!(nos, ["33다3333", "22나2222", "11가1111"]);
    }

    #[test]
    fn test_string_sort_on_model() {
        let records = fleet();
        let sort = SortState {
            key: Some(columns::MODEL.to_string()),
            direction: SortDirection::Ascending,
        };

        let rows = compute(&records, &FilterState::new(), &sort, today());
        let models: Vec<&str> = rows.iter().map(|r| r.model()).collect();
        let mut expected = models.clone();
        expected.sort();
        assert_eq!(models, expected);
    }

    #[test]
    fn test_sort_ties_keep_filter_order() {
        let records = vec![
            record(&[(columns::VEHICLE_NO, "a"), (columns::MILEAGE, "5,000")]),
            record(&[(columns::VEHICLE_NO, "b"), (columns::MILEAGE, "5000km")]),
            record(&[(columns::VEHICLE_NO, "c"), (columns::MILEAGE, "1000")]),
        ];
        let sort = SortState {
            key: Some(columns::MILEAGE.to_string()),
            direction: SortDirection::Descending,
        };

        let rows = compute(&records, &FilterState::new(), &sort, today());
        let nos: Vec<&str> = rows.iter().map(|r| r.vehicle_no()).collect();
        // 같은 5000끼리는 원래 순서 유지
        assert_eq!(nos, ["a", "b", "c"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = fleet();
        let mut filter = FilterState::new();
        filter.mileage_buckets.insert(MileageBucket::From10kTo30k);

        let once = compute(&records, &filter, &SortState::new(), today());
        let twice = compute(&once, &filter, &SortState::new(), today());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_no_match_yields_empty() {
        let records = fleet();
        let mut filter = FilterState::new();
        filter.search = "존재하지 않는 차".to_string();

        let rows = compute(&records, &filter, &SortState::new(), today());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_search_matches_all() {
        let records = fleet();
        let rows = compute(&records, &FilterState::new(), &SortState::new(), today());
        assert_eq!(rows.len(), records.len());
    }

    #[test]
    fn test_is_numeric_column() {
        assert!(is_numeric_column(columns::MILEAGE));
        assert!(is_numeric_column("금액_대여료_36M"));
        assert!(is_numeric_column("금액_보증금_60M"));
        assert!(!is_numeric_column(columns::MODEL));
        assert!(!is_numeric_column(columns::REGISTERED_AT));
    }
}
