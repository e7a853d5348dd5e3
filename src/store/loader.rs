//! # 质量表 CSV 读取
//!
//! 读取每行一个 (核素, 模型) 的宽表：
//! ```text
//! N,Z,Model,BE,Wigner,uncertainty,estimated,QDB2t,...
//! 8,8,EXP,-127.619296,0,0.000000,False,
//! ```
//! 只有 N, Z, Model, BE 为必需列。
//!
//! ## 依赖关系
//! - 被 `store/mod.rs` 调用
//! - 使用 `csv` + `serde` 反序列化为 `NuclideRecord`

use crate::error::{BmexError, Result};
use crate::models::NuclideRecord;
use crate::store::BindingEnergyStore;

use std::io::Read;
use std::path::Path;

/// 从文件加载完整存储
pub fn load_csv(path: &Path) -> Result<BindingEnergyStore> {
    if !path.exists() {
        return Err(BmexError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| BmexError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let records = read_records(file).map_err(|e| match e {
        BmexError::CsvError(err) => BmexError::ParseError {
            path: path.display().to_string(),
            reason: err.to_string(),
        },
        other => other,
    })?;

    BindingEnergyStore::from_records(records)
}

/// 从任意读取器解析记录
pub fn read_records<R: Read>(reader: R) -> Result<Vec<NuclideRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let record: NuclideRecord = row?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
N,Z,Model,BE,Wigner,uncertainty,estimated
8,8,EXP,-127.619,0,0.0001,False
7,8,EXP,-111.955,0,0.0007,False
8,8,SLY4,-128.1,0,,
8,8,SLY4,-128.4,1,,
";

    #[test]
    fn test_read_records() {
        let records = read_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].uncertainty, Some(0.0001));
        assert_eq!(records[2].uncertainty, None);
        assert_eq!(records[3].wigner, 1);
    }

    #[test]
    fn test_load_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let store = load_csv(file.path()).unwrap();
        assert_eq!(store.model_names().count(), 2);
        assert_eq!(store.lookup_be(8, 8, "SLY4", 1), Ok(-128.4));
        assert_eq!(store.table("EXP").map(|t| t.len()), Some(2));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_csv(Path::new("/nonexistent/masses.csv"));
        assert!(matches!(result, Err(BmexError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_malformed_row() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"N,Z,Model,BE\n8,eight,EXP,-127.6\n").unwrap();

        let result = load_csv(file.path());
        assert!(matches!(result, Err(BmexError::ParseError { .. })));
    }

    #[test]
    fn test_load_duplicate_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"N,Z,Model,BE\n8,8,EXP,-127.6\n8,8,EXP,-127.7\n")
            .unwrap();

        let result = load_csv(file.path());
        assert!(matches!(result, Err(BmexError::DuplicateRecord { .. })));
    }
}
