//! CSV 行解析
//!
//! 表头取第一条非空行，之后每条非空行映射为一条 [`RawRecord`]。
//! 引号按标准 CSV 规则处理，字段值可以包含逗号和引号。

use std::collections::{HashMap, HashSet};
use std::fmt;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::models::ErrorCode;
use crate::models::imports::entities::RawRecord;

/// 格式错误：中止整个导入，任何行都不会提交
#[derive(Debug, Clone, PartialEq)]
pub enum ImportFormatError {
    NoData,
    MissingColumns(Vec<String>),
    DuplicateColumns(Vec<String>),
    TooManyRows { limit: usize, found: usize },
    Malformed(String),
}

impl ImportFormatError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::NoData => ErrorCode::ImportFileDataInvalid,
            Self::MissingColumns(_) => ErrorCode::ImportFileMissingColumn,
            Self::DuplicateColumns(_) => ErrorCode::ImportFileDataInvalid,
            Self::TooManyRows { .. } => ErrorCode::ImportFileDataInvalid,
            Self::Malformed(_) => ErrorCode::ImportFileParseFailed,
        }
    }
}

impl fmt::Display for ImportFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "No data found in file"),
            Self::MissingColumns(cols) => {
                write!(f, "Missing required columns: {}", cols.join(", "))
            }
            Self::DuplicateColumns(cols) => {
                write!(f, "Duplicate columns in header: {}", cols.join(", "))
            }
            Self::TooManyRows { limit, found } => {
                write!(f, "File has {found} data rows, at most {limit} allowed")
            }
            Self::Malformed(msg) => write!(f, "Malformed CSV: {msg}"),
        }
    }
}

impl std::error::Error for ImportFormatError {}

/// 解析结果：表头 + 数据行
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub headers: Vec<String>,
    pub records: Vec<RawRecord>,
}

impl ParsedTable {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }
}

// 表头中重复出现的列名，按首次重复的顺序
fn duplicate_columns(headers: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dups: Vec<String> = Vec::new();
    for h in headers {
        if !seen.insert(h.as_str()) && !dups.contains(h) {
            dups.push(h.clone());
        }
    }
    dups
}

// 仅含空白的行
fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty) && record.len() <= 1
}

/// 解析 CSV 文本
pub fn parse_table(text: &str) -> Result<ParsedTable, ImportFormatError> {
    let text = text.trim_start_matches('\u{feff}');

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| ImportFormatError::Malformed(e.to_string()))?;
        if is_blank(&record) {
            continue;
        }

        match headers {
            None => {
                let cols: Vec<String> = record.iter().map(str::to_string).collect();
                let dups = duplicate_columns(&cols);
                if !dups.is_empty() {
                    return Err(ImportFormatError::DuplicateColumns(dups));
                }
                headers = Some(cols);
            }
            Some(ref cols) => {
                // 按位置对齐；缺少的尾部字段补空串，多出的字段忽略
                let fields: HashMap<String, String> = cols
                    .iter()
                    .enumerate()
                    .map(|(i, col)| (col.clone(), record.get(i).unwrap_or("").to_string()))
                    .collect();
                // 源文件中该行起始的行号（从 1 开始）
                let line = record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(records.len() + 2);
                records.push(RawRecord { line, fields });
            }
        }
    }

    let headers = headers.ok_or(ImportFormatError::NoData)?;
    if records.is_empty() {
        return Err(ImportFormatError::NoData);
    }

    Ok(ParsedTable { headers, records })
}

/// 检查表头是否包含全部必需列
pub fn require_columns(table: &ParsedTable, columns: &[&str]) -> Result<(), ImportFormatError> {
    let missing: Vec<String> = columns
        .iter()
        .filter(|col| !table.has_column(col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportFormatError::MissingColumns(missing))
    }
}

/// 单次导入行数上限
pub fn check_row_limit(table: &ParsedTable, limit: usize) -> Result<(), ImportFormatError> {
    if table.records.len() > limit {
        return Err(ImportFormatError::TooManyRows {
            limit,
            found: table.records.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_n_rows_keyed_by_every_header() {
        let text = "full_name,email,student_id\nA,a@x.com,S1\nB,b@x.com,S2\nC,c@x.com,S3\n";
        let table = parse_table(text).unwrap();

        assert_eq!(table.headers, vec!["full_name", "email", "student_id"]);
        assert_eq!(table.records.len(), 3);
        for record in &table.records {
            for header in &table.headers {
                assert!(record.fields.contains_key(header));
            }
        }
        assert_eq!(table.records[1].get("email"), "b@x.com");
    }

    #[test]
    fn test_values_trimmed_and_blank_lines_skipped() {
        let text = "\n\n  full_name , email \n\n  Ann  ,  ann@x.com \n   \n";
        let table = parse_table(text).unwrap();

        assert_eq!(table.headers, vec!["full_name", "email"]);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].get("full_name"), "Ann");
        assert_eq!(table.records[0].get("email"), "ann@x.com");
    }

    #[test]
    fn test_short_row_padded_and_extra_values_ignored() {
        let text = "a,b,c\n1\n1,2,3,4\n";
        let table = parse_table(text).unwrap();

        assert_eq!(table.records[0].get("a"), "1");
        assert_eq!(table.records[0].get("b"), "");
        assert_eq!(table.records[0].get("c"), "");
        assert_eq!(table.records[1].fields.len(), 3);
        assert_eq!(table.records[1].get("c"), "3");
    }

    #[test]
    fn test_row_numbers_follow_source_lines() {
        let text = "a,b\n1,2\n3,4\n";
        let table = parse_table(text).unwrap();

        assert_eq!(table.records[0].line, 2);
        assert_eq!(table.records[1].line, 3);
    }

    #[test]
    fn test_row_numbers_survive_blank_lines_and_multiline_values() {
        let text = "student_id,remarks\n\nS1,ok\nS2,\"first\nsecond\"\n\nS3,ok\n";
        let table = parse_table(text).unwrap();

        let lines: Vec<usize> = table.records.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![3, 4, 7]);
        assert_eq!(table.records[1].get("remarks"), "first\nsecond");
    }

    #[test]
    fn test_repeated_header_rejected() {
        let err = parse_table("email,full_name,email\nreal@x.com,A,\n").unwrap_err();

        assert_eq!(
            err,
            ImportFormatError::DuplicateColumns(vec!["email".to_string()])
        );
        assert_eq!(err.error_code(), ErrorCode::ImportFileDataInvalid);
    }

    #[test]
    fn test_quoted_values_keep_delimiters() {
        let text = "course_name,department\n\"Data, Systems\",\"The \"\"Core\"\" Dept\"\n";
        let table = parse_table(text).unwrap();

        assert_eq!(table.records[0].get("course_name"), "Data, Systems");
        assert_eq!(table.records[0].get("department"), "The \"Core\" Dept");
    }

    #[test]
    fn test_fewer_than_two_lines_is_no_data() {
        assert_eq!(parse_table("").unwrap_err(), ImportFormatError::NoData);
        assert_eq!(
            parse_table("full_name,email\n\n  \n").unwrap_err(),
            ImportFormatError::NoData
        );
    }

    #[test]
    fn test_require_columns_lists_missing() {
        let table = parse_table("full_name,email\nA,a@x.com\n").unwrap();

        assert!(require_columns(&table, &["full_name", "email"]).is_ok());
        assert_eq!(
            require_columns(&table, &["full_name", "email", "student_id"]).unwrap_err(),
            ImportFormatError::MissingColumns(vec!["student_id".to_string()])
        );
    }

    #[test]
    fn test_row_limit() {
        let table = parse_table("a\n1\n2\n3\n").unwrap();

        assert!(check_row_limit(&table, 3).is_ok());
        assert_eq!(
            check_row_limit(&table, 2).unwrap_err(),
            ImportFormatError::TooManyRows { limit: 2, found: 3 }
        );
    }
}
