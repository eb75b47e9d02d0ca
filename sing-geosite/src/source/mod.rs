pub mod base_parser;
pub mod dat_parser;
pub mod proto;

pub use base_parser::{SourceFileType, SourceParser};
pub use dat_parser::DatParser;

use std::fs;
use std::path::Path;

use sing_geosite_engine::SourceEntry;

use crate::error::{GeoResult, GeositeError};

/// 读取源文件并交给解析器解码
pub fn load_source(parser: &dyn SourceParser, path: &Path) -> GeoResult<Vec<SourceEntry>> {
    let bytes = fs::read(path).map_err(|source| GeositeError::SourceReadError {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "[SOURCE] 读取源文件 {} | 类型: {} | 字节: {}",
        path.display(),
        parser.source_file_type().to_str(),
        bytes.len()
    );
    parser.parse_from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sing_geosite_engine::SourceDomain;

    /// 每行一个 `code domain`，全部按 full 处理
    #[derive(Debug)]
    struct LineParser;

    impl SourceParser for LineParser {
        fn source_file_type(&self) -> SourceFileType {
            SourceFileType::DlcDat
        }

        fn parse_from_bytes(&self, bytes: &[u8]) -> GeoResult<Vec<SourceEntry>> {
            Ok(String::from_utf8_lossy(bytes)
                .lines()
                .filter_map(|line| line.split_once(' '))
                .map(|(code, value)| SourceEntry::new(code, vec![SourceDomain::full(value)]))
                .collect())
        }
    }

    #[test]
    fn test_load_source_with_custom_parser() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("list.txt");
        fs::write(&path, "CN a.cn\nGOOGLE google.com\n").unwrap();

        let entries = load_source(&LineParser, &path).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].code, "cn");
        assert_eq!(entries[1].domains, vec![SourceDomain::full("google.com")]);
    }

    #[test]
    fn test_load_source_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("absent.dat");

        let err = load_source(&LineParser, &path).unwrap_err();

        assert!(matches!(err, GeositeError::SourceReadError { path: ref failed, .. } if failed == &path));
    }
}
