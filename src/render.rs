//! 터미널 출력
//!
//! 파생된 레코드 시퀀스를 표/상세/전달용 텍스트로 만든다.
//! 표시 전용 계층이라 코어 상태는 읽기만 한다.

use crate::profile::ManagerProfile;
use fleet_lease_common::{columns, Record, Term};

/// 입금 계좌 안내 (회사 공용 계좌)
const BANK_ACCOUNT: &str = "우리은행 1005-804-372210";

/// 목록 화면에 보여줄 컬럼. 선택된 계약 기간의 대여료 컬럼이 뒤에 붙는다
pub fn display_columns(terms: &[Term]) -> Vec<String> {
    let mut cols: Vec<String> = [
        columns::STATUS,
        columns::CATEGORY,
        columns::VEHICLE_NO,
        columns::MAKER,
        columns::MODEL,
        columns::MILEAGE,
        columns::REGISTERED_AT,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for term in terms {
        cols.push(term.fee_column());
    }
    cols
}

/// 레코드 시퀀스를 구분자 표로 출력한다
pub fn print_table(rows: &[Record], terms: &[Term], limit: Option<usize>) {
    let cols = display_columns(terms);
    println!("{}", cols.join(" | "));
    println!("{}", "-".repeat(72));

    let shown = limit.unwrap_or(rows.len()).min(rows.len());
    for record in &rows[..shown] {
        let line: Vec<&str> = cols.iter().map(|c| record.value_or_empty(c)).collect();
        println!("{}", line.join(" | "));
    }

    if shown < rows.len() {
        println!("... 외 {}건", rows.len() - shown);
    }
}

/// 상세 화면: 레코드의 모든 필드를 컬럼 순서대로
pub fn detail_text(record: &Record) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "■ {} {} ({})\n",
        record.maker(),
        record.model(),
        record.vehicle_no()
    ));
    for (column, value) in record.iter() {
        let shown = if value.is_empty() { "-" } else { value };
        out.push_str(&format!("  {}: {}\n", column, shown));
    }
    out
}

/// 전달용 텍스트: 고객에게 복사해 보내는 안내문.
/// 담당자 정보가 뒤에 붙고, 설정에 따라 입금 계좌를 포함한다
pub fn share_text(record: &Record, term: Term, profile: &ManagerProfile) -> String {
    let mut out = String::new();
    out.push_str("[매물 안내]\n");
    out.push_str(&format!(
        "차량: {} {} ({})\n",
        record.maker(),
        record.model(),
        record.vehicle_no()
    ));
    out.push_str(&format!("상태: {}\n", record.status()));
    out.push_str(&format!(
        "대여료({}): 월 {}원\n",
        term.label(),
        format_amount(record.rental_fee(term))
    ));
    out.push_str(&format!(
        "보증금: {}원\n",
        format_amount(record.deposit(term))
    ));
    out.push_str(&format!(
        "주행거리: {}km\n",
        format_amount(record.mileage_km())
    ));
    out.push_str(&format!(
        "등록일: {}\n",
        record.value_or_empty(columns::REGISTERED_AT)
    ));

    if !profile.is_unset() {
        out.push('\n');
        out.push_str(&format!(
            "담당: {} {}\n",
            profile.manager_name, profile.manager_title
        ));
        out.push_str(&format!("연락처: {}\n", profile.phone));
        out.push_str(&format!("{}\n", profile.company_name));
    }
    if profile.include_bank_account {
        out.push_str(&format!("입금계좌: {}\n", BANK_ACCOUNT));
    }
    out
}

/// 천 단위 콤마
fn format_amount(amount: i64) -> String {
    let digits = amount.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
