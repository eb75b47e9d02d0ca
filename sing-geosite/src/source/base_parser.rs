//! 通用规则源解析器 Trait

use sing_geosite_engine::SourceEntry;

use crate::error::GeoResult;

// 源文件类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFileType {
    /// v2fly domain-list-community 编译产物（protobuf）
    DlcDat,
}

impl SourceFileType {
    pub fn to_str(&self) -> &str {
        match self {
            SourceFileType::DlcDat => "dlc_dat",
        }
    }
}

/// 源数据解析器
pub trait SourceParser: std::fmt::Debug + Send + Sync {
    fn source_file_type(&self) -> SourceFileType;

    fn parse_from_bytes(&self, bytes: &[u8]) -> GeoResult<Vec<SourceEntry>>;
}
