use super::enums::SourceDomainType;

/// 源数据中的单条域名记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDomain {
    pub domain_type: SourceDomainType,
    pub value: String,
    /// 属性标记（如 `cn`、`ads`），仅保留属性名
    pub attributes: Vec<String>,
}

impl SourceDomain {
    pub fn new(domain_type: SourceDomainType, value: impl Into<String>) -> Self {
        Self {
            domain_type,
            value: value.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(SourceDomainType::Plain, value)
    }

    pub fn regex(value: impl Into<String>) -> Self {
        Self::new(SourceDomainType::Regex, value)
    }

    pub fn root_domain(value: impl Into<String>) -> Self {
        Self::new(SourceDomainType::RootDomain, value)
    }

    pub fn full(value: impl Into<String>) -> Self {
        Self::new(SourceDomainType::Full, value)
    }
}

/// 源数据中的单个分类条目
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceEntry {
    /// 分类代码，构造时统一小写
    pub code: String,
    pub domains: Vec<SourceDomain>,
}

impl SourceEntry {
    pub fn new(code: &str, domains: Vec<SourceDomain>) -> Self {
        Self {
            code: code.to_lowercase(),
            domains,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_code_lowercased() {
        let entry = SourceEntry::new("GEOLOCATION-!CN", vec![]);
        assert_eq!(entry.code, "geolocation-!cn");
    }

    #[test]
    fn test_domain_type_is_always_explicit() {
        let full = SourceDomain::full("a.cn").with_attribute("cn");
        assert_eq!(full.domain_type, SourceDomainType::Full);
        assert_eq!(full.attributes, vec!["cn"]);

        let unknown = SourceDomain::new(SourceDomainType::Unknown(9), "x");
        assert_eq!(unknown.domain_type, SourceDomainType::Unknown(9));
        assert!(unknown.attributes.is_empty());
        assert!(SourceEntry::default().domains.is_empty());
    }
}
