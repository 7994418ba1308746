//! CSV 导出：UTF-8 BOM + 分号分隔，便于表格软件直接打开

use actix_web::HttpResponse;
use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};

use crate::errors::{EcoleError, Result};

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
pub const DELIMITER: u8 = b';';

/// 可导出为 CSV 行的实体
pub trait CsvRecord {
    fn headers() -> &'static [&'static str];
    fn record(&self) -> Vec<String>;
}

/// 写出表头与全部数据行
pub fn to_csv_bytes<T: CsvRecord>(items: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(T::headers())?;
    for item in items {
        writer.write_record(item.record())?;
    }

    writer
        .into_inner()
        .map_err(|e| EcoleError::serialization(format!("CSV 写入失败: {e}")))
}

/// 以附件形式返回 CSV
pub fn attachment_response(file_name: &str, body: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/csv; charset=utf-8"))
        .insert_header((
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ))
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(&'static str, i64);

    impl CsvRecord for Line {
        fn headers() -> &'static [&'static str] {
            &["nom", "montant"]
        }

        fn record(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_bom_and_semicolon() {
        let bytes = to_csv_bytes(&[Line("Diop; Awa", 15000), Line("Fall", 2000)]).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "nom;montant");
        assert_eq!(lines[1], "\"Diop; Awa\";15000");
        assert_eq!(lines[2], "Fall;2000");
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let bytes = to_csv_bytes::<Line>(&[]).unwrap();
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(text, "nom;montant\n");
    }
}
