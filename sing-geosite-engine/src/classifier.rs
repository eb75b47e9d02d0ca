//! 规则分类器：单条源域名 → 零或多条规则项
use crate::core::{RuleItem, SourceDomain, SourceDomainType};

/// root-domain 判定是否补充精确匹配时检查的分隔符
const DOMAIN_LABEL_SEPARATOR: char = '.';

/// 规则分类器
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl RuleClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 分类单条源域名
    ///
    /// | 源类型 | 产出 |
    /// |---|---|
    /// | plain | domain_keyword(value) |
    /// | regex | domain_regex(value) |
    /// | root-domain | domain(value)（仅当含 `.`），domain_suffix("." + value) |
    /// | full | domain(value) |
    ///
    /// 未识别的类型不产出任何规则项
    pub fn classify(&self, domain: &SourceDomain) -> Vec<RuleItem> {
        let value = domain.value.as_str();
        match domain.domain_type {
            SourceDomainType::Plain => vec![RuleItem::domain_keyword(value)],
            SourceDomainType::Regex => vec![RuleItem::domain_regex(value)],
            SourceDomainType::RootDomain => {
                let mut items = Vec::with_capacity(2);
                // 单标签的 root-domain 不补精确匹配，后缀匹配照常产出
                if value.contains(DOMAIN_LABEL_SEPARATOR) {
                    items.push(RuleItem::domain(value));
                }
                items.push(RuleItem::domain_suffix(format!(
                    "{DOMAIN_LABEL_SEPARATOR}{value}"
                )));
                items
            }
            SourceDomainType::Full => vec![RuleItem::domain(value)],
            SourceDomainType::Unknown(tag) => {
                log::trace!("Unknown source domain type {} for value {}", tag, value);
                Vec::new()
            }
        }
    }

    /// 批量分类并追加到 `out`，保持输入顺序
    pub fn classify_into<'a, I>(&self, domains: I, out: &mut Vec<RuleItem>)
    where
        I: IntoIterator<Item = &'a SourceDomain>,
    {
        for domain in domains {
            out.extend(self.classify(domain));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_regex() {
        let classifier = RuleClassifier::new();
        assert_eq!(
            classifier.classify(&SourceDomain::plain("google")),
            vec![RuleItem::domain_keyword("google")]
        );
        assert_eq!(
            classifier.classify(&SourceDomain::regex(r"^ads\d+\.example\.com$")),
            vec![RuleItem::domain_regex(r"^ads\d+\.example\.com$")]
        );
    }

    #[test]
    fn test_root_domain_with_separator_emits_two_items() {
        let items = RuleClassifier::new().classify(&SourceDomain::root_domain("example.com"));
        assert_eq!(
            items,
            vec![
                RuleItem::domain("example.com"),
                RuleItem::domain_suffix(".example.com"),
            ]
        );
    }

    #[test]
    fn test_single_label_root_domain_emits_suffix_only() {
        let items = RuleClassifier::new().classify(&SourceDomain::root_domain("cn"));
        assert_eq!(items, vec![RuleItem::domain_suffix(".cn")]);
    }

    #[test]
    fn test_full_domain() {
        let items = RuleClassifier::new().classify(&SourceDomain::full("www.example.com"));
        assert_eq!(items, vec![RuleItem::domain("www.example.com")]);
    }

    #[test]
    fn test_unknown_type_emits_nothing() {
        let domain = SourceDomain::new(SourceDomainType::Unknown(9), "example.com");
        assert!(RuleClassifier::new().classify(&domain).is_empty());
    }

    #[test]
    fn test_classify_into_keeps_order() {
        let domains = vec![
            SourceDomain::full("a.com"),
            SourceDomain::plain("b"),
            SourceDomain::root_domain("c.com"),
        ];
        let mut out = Vec::new();
        RuleClassifier::new().classify_into(&domains, &mut out);
        assert_eq!(
            out,
            vec![
                RuleItem::domain("a.com"),
                RuleItem::domain_keyword("b"),
                RuleItem::domain("c.com"),
                RuleItem::domain_suffix(".c.com"),
            ]
        );
    }
}
