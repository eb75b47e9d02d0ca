use rustc_hash::FxHashSet;
use std::fmt::{Display, Formatter};

use super::enums::RuleItemType;

/// 标准化规则项（类型 + 值），按结构判等
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleItem {
    pub item_type: RuleItemType,
    pub value: String,
}

impl RuleItem {
    pub fn new(item_type: RuleItemType, value: impl Into<String>) -> Self {
        Self {
            item_type,
            value: value.into(),
        }
    }

    pub fn domain(value: impl Into<String>) -> Self {
        Self::new(RuleItemType::Domain, value)
    }

    pub fn domain_suffix(value: impl Into<String>) -> Self {
        Self::new(RuleItemType::DomainSuffix, value)
    }

    pub fn domain_keyword(value: impl Into<String>) -> Self {
        Self::new(RuleItemType::DomainKeyword, value)
    }

    pub fn domain_regex(value: impl Into<String>) -> Self {
        Self::new(RuleItemType::DomainRegex, value)
    }
}

impl Display for RuleItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.item_type, self.value)
    }
}

/// 按结构去重，保留首次出现的顺序
pub fn dedup_items(items: Vec<RuleItem>) -> Vec<RuleItem> {
    let mut seen: FxHashSet<RuleItem> = FxHashSet::default();
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let items = vec![
            RuleItem::domain("a.com"),
            RuleItem::domain_suffix(".a.com"),
            RuleItem::domain("a.com"),
            RuleItem::domain_keyword("a"),
            RuleItem::domain_suffix(".a.com"),
        ];
        assert_eq!(
            dedup_items(items),
            vec![
                RuleItem::domain("a.com"),
                RuleItem::domain_suffix(".a.com"),
                RuleItem::domain_keyword("a"),
            ]
        );
    }

    #[test]
    fn test_same_value_different_type_is_distinct() {
        let items = vec![RuleItem::domain("google"), RuleItem::domain_keyword("google")];
        assert_eq!(dedup_items(items).len(), 2);
    }
}
