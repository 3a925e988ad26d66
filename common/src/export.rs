//! 엑셀 다운로드 스텁
//!
//! 원본 화면의 "엑셀 다운로드" 버튼과 동일하게, 현재 보이는 컬럼의
//! 헤더 행만 담긴 통합문서를 만든다. 데이터 행은 쓰지 않는다.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};

/// 헤더 행만 담긴 xlsx 버퍼를 생성한다
pub fn generate_header_stub(columns: &[&str]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(0xF8F9FB))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("매물목록")
        .map_err(|e| format!("시트명 설정 오류: {}", e))?;

    for (i, name) in columns.iter().enumerate() {
        let col = i as u16;
        worksheet
            .set_column_width(col, 16.0)
            .map_err(|e| format!("열 너비 설정 오류: {}", e))?;
        worksheet
            .write_string_with_format(0, col, *name, &header_format)
            .map_err(|e| format!("헤더 기록 오류: {}", e))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("엑셀 저장 오류: {}", e))
}
