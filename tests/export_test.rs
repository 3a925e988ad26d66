//! 엑셀 내보내기 스텁 테스트

use fleet_lease_common::export::generate_header_stub;
use fleet_lease_common::Term;
use fleet_lease_rust::render::display_columns;
use tempfile::tempdir;

#[test]
fn test_header_stub_written_to_disk() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("매물목록.xlsx");

    let columns = display_columns(&[Term::M36, Term::M48]);
    let refs: Vec<&str> = columns.iter().map(String::as_str).collect();

    let buffer = generate_header_stub(&refs).expect("엑셀 생성 실패");
    std::fs::write(&output_path, &buffer).expect("파일 기록 실패");

    assert!(output_path.exists());
    let metadata = std::fs::metadata(&output_path).expect("메타데이터 조회 실패");
    assert!(metadata.len() > 0, "엑셀 파일이 비어 있다");
}

#[test]
fn test_header_columns_follow_selected_terms() {
    let columns = display_columns(&[Term::M60]);
    assert!(columns.contains(&"금액_대여료_60M".to_string()));
    assert!(!columns.contains(&"금액_대여료_36M".to_string()));

    // 스텁에는 데이터 행이 없으므로 컬럼 수만 달라진다
    let refs: Vec<&str> = columns.iter().map(String::as_str).collect();
    let buffer = generate_header_stub(&refs).expect("엑셀 생성 실패");
    assert_eq!(&buffer[..2], b"PK");
}
