use std::fmt::{Display, Formatter};

/// 规则项类型，取值与 geosite.db 中的类型字节一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleItemType {
    /// 完整域名精确匹配
    Domain,
    /// 域名后缀匹配（值带前导 `.`）
    DomainSuffix,
    /// 关键字匹配
    DomainKeyword,
    /// 正则匹配
    DomainRegex,
}

impl RuleItemType {
    /// 数据库编码中的类型字节
    pub fn as_u8(self) -> u8 {
        match self {
            RuleItemType::Domain => 0,
            RuleItemType::DomainSuffix => 1,
            RuleItemType::DomainKeyword => 2,
            RuleItemType::DomainRegex => 3,
        }
    }
}

impl Display for RuleItemType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleItemType::Domain => write!(f, "domain"),
            RuleItemType::DomainSuffix => write!(f, "domain_suffix"),
            RuleItemType::DomainKeyword => write!(f, "domain_keyword"),
            RuleItemType::DomainRegex => write!(f, "domain_regex"),
        }
    }
}

/// 源数据中的域名类型标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceDomainType {
    Plain,
    Regex,
    RootDomain,
    Full,
    /// 未识别的类型标记，分类时不产生任何规则项
    Unknown(i32),
}
