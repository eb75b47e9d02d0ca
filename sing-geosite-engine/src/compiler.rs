//! 规则编译：去重后的规则项 → 按类型分组的 headless 规则
use crate::core::{RuleItem, RuleItemType};

/// 不绑定出站动作的匹配规则，仅用于域名归类
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessRule {
    pub domain: Vec<String>,
    pub domain_suffix: Vec<String>,
    pub domain_keyword: Vec<String>,
    pub domain_regex: Vec<String>,
    pub invert: bool,
}

impl HeadlessRule {
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
            && self.domain_suffix.is_empty()
            && self.domain_keyword.is_empty()
            && self.domain_regex.is_empty()
    }

    /// 四个分组的条目总数
    pub fn rule_count(&self) -> usize {
        self.domain.len() + self.domain_suffix.len() + self.domain_keyword.len() + self.domain_regex.len()
    }
}

/// 规则集（一组 headless 规则）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainRuleSet {
    pub rules: Vec<HeadlessRule>,
}

impl PlainRuleSet {
    pub fn single(rule: HeadlessRule) -> Self {
        Self { rules: vec![rule] }
    }
}

/// 规则编译器
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleCompiler;

impl RuleCompiler {
    pub fn new() -> Self {
        Self
    }

    /// 按类型分组，组内保持输入顺序
    pub fn compile(&self, items: &[RuleItem]) -> HeadlessRule {
        let mut rule = HeadlessRule::default();
        for item in items {
            let group = match item.item_type {
                RuleItemType::Domain => &mut rule.domain,
                RuleItemType::DomainSuffix => &mut rule.domain_suffix,
                RuleItemType::DomainKeyword => &mut rule.domain_keyword,
                RuleItemType::DomainRegex => &mut rule.domain_regex,
            };
            group.push(item.value.clone());
        }
        rule
    }

    /// 编译为单规则的规则集
    pub fn compile_rule_set(&self, items: &[RuleItem]) -> PlainRuleSet {
        PlainRuleSet::single(self.compile(items))
    }
}
