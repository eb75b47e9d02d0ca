//! dlc.dat 解析器：protobuf GeoSiteList → SourceEntry 列表
use prost::Message;
use sing_geosite_engine::{SourceDomain, SourceDomainType, SourceEntry};

use super::base_parser::{SourceFileType, SourceParser};
use super::proto::{domain, Domain, GeoSiteList};
use crate::error::GeoResult;

/// dlc.dat 解析器
#[derive(Debug, Clone, Default)]
pub struct DatParser;

impl DatParser {
    pub fn new() -> Self {
        Self::default()
    }

    fn convert_domain(raw: Domain) -> SourceDomain {
        let domain_type = match domain::Type::try_from(raw.r#type) {
            Ok(domain::Type::Plain) => SourceDomainType::Plain,
            Ok(domain::Type::Regex) => SourceDomainType::Regex,
            Ok(domain::Type::RootDomain) => SourceDomainType::RootDomain,
            Ok(domain::Type::Full) => SourceDomainType::Full,
            Err(_) => SourceDomainType::Unknown(raw.r#type),
        };
        SourceDomain {
            domain_type,
            value: raw.value,
            attributes: raw
                .attribute
                .into_iter()
                .map(|attribute| attribute.key)
                .collect(),
        }
    }
}

impl SourceParser for DatParser {
    fn source_file_type(&self) -> SourceFileType {
        SourceFileType::DlcDat
    }

    fn parse_from_bytes(&self, bytes: &[u8]) -> GeoResult<Vec<SourceEntry>> {
        let list = GeoSiteList::decode(bytes)?;
        let entries: Vec<SourceEntry> = list
            .entry
            .into_iter()
            .map(|site| {
                let domains = site.domain.into_iter().map(Self::convert_domain).collect();
                SourceEntry::new(&site.country_code, domains)
            })
            .collect();
        log::debug!(
            "[SOURCE] dlc.dat 解码完成 | 字节: {} | 条目: {}",
            bytes.len(),
            entries.len()
        );
        Ok(entries)
    }
}
