use std::collections::btree_map;
use std::collections::BTreeMap;

use super::item::RuleItem;
use crate::merger::{CATEGORY_PREFIX, CN_ATTRIBUTE};

/// 分类代码与属性之间的分隔符（`<base>@<attribute>`）
pub const ATTRIBUTE_SEPARATOR: char = '@';
/// 分类代码内部的片段分隔符（`geolocation-cn`）
pub const SEGMENT_SEPARATOR: char = '-';
/// 否定标记（`geolocation-!cn`）
pub const NEGATION_MARKER: char = '!';

/// 分类代码 → 规则项列表
///
/// 底层使用 `BTreeMap`，所有遍历都按代码字典序进行，保证输出可复现
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    inner: BTreeMap<String, Vec<RuleItem>>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入分类，返回被覆盖的旧值
    pub fn insert(&mut self, code: impl Into<String>, items: Vec<RuleItem>) -> Option<Vec<RuleItem>> {
        self.inner.insert(code.into(), items)
    }

    pub fn get(&self, code: &str) -> Option<&Vec<RuleItem>> {
        self.inner.get(code)
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut Vec<RuleItem>> {
        self.inner.get_mut(code)
    }

    pub fn remove(&mut self, code: &str) -> Option<Vec<RuleItem>> {
        self.inner.remove(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.inner.contains_key(code)
    }

    /// 当前所有分类代码（已排序）
    pub fn codes(&self) -> Vec<String> {
        self.inner.keys().cloned().collect()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<RuleItem>> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// 规则项总数（所有分类之和）
    pub fn item_count(&self) -> usize {
        self.inner.values().map(Vec::len).sum()
    }

    /// 按代码列表抽取子集，缺失的代码对应空列表
    pub fn subset<S: AsRef<str>>(&self, codes: &[S]) -> CategoryMap {
        let mut subset = CategoryMap::new();
        for code in codes {
            let code = code.as_ref();
            let items = self.inner.get(code).cloned().unwrap_or_default();
            subset.insert(code, items);
        }
        subset
    }
}

impl<'a> IntoIterator for &'a CategoryMap {
    type Item = (&'a String, &'a Vec<RuleItem>);
    type IntoIter = btree_map::Iter<'a, String, Vec<RuleItem>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl FromIterator<(String, Vec<RuleItem>)> for CategoryMap {
    fn from_iter<T: IntoIterator<Item = (String, Vec<RuleItem>)>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

/// 分类代码的只读视图
///
/// 仅当代码中恰好包含一个 `@` 时才视为属性分类，其余一律按普通代码处理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCode<'a> {
    pub code: &'a str,
    pub base: &'a str,
    pub attribute: Option<&'a str>,
}

impl<'a> CategoryCode<'a> {
    pub fn parse(code: &'a str) -> Self {
        let mut parts = code.split(ATTRIBUTE_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(attribute), None) => Self {
                code,
                base,
                attribute: Some(attribute),
            },
            _ => Self {
                code,
                base: code,
                attribute: None,
            },
        }
    }

    /// 组合属性分类代码
    pub fn qualified(base: &str, attribute: &str) -> String {
        format!("{base}{ATTRIBUTE_SEPARATOR}{attribute}")
    }

    pub fn is_qualified(&self) -> bool {
        self.attribute.is_some()
    }

    /// base 最后一个 `-` 之后的片段；无分隔符或片段为空时返回整个 base
    pub fn tail_segment(&self) -> &'a str {
        let base = self.base;
        match base.rsplit_once(SEGMENT_SEPARATOR) {
            Some((_, tail)) if !tail.is_empty() => tail,
            _ => base,
        }
    }

    /// 属性与尾片段完全相同：属性分类与基础分类重复
    pub fn is_pure_duplicate(&self) -> bool {
        match self.attribute {
            Some(attribute) => self.tail_segment() == attribute,
            None => false,
        }
    }

    /// 属性与尾片段仅差一个前导 `!`：否定对
    pub fn is_negation_pair(&self) -> bool {
        let Some(attribute) = self.attribute else {
            return false;
        };
        let tail = self.tail_segment();
        attribute.strip_prefix(NEGATION_MARKER) == Some(tail)
            || tail.strip_prefix(NEGATION_MARKER) == Some(attribute)
    }

    /// `category-*@cn` 且 base 不以 `-cn` / `-!cn` 结尾
    pub fn is_regional_merge_source(&self) -> bool {
        if self.attribute != Some(CN_ATTRIBUTE) {
            return false;
        }
        if !self.base.starts_with(CATEGORY_PREFIX) {
            return false;
        }
        let own_suffix = format!("{SEGMENT_SEPARATOR}{CN_ATTRIBUTE}");
        let negated_suffix = format!("{SEGMENT_SEPARATOR}{NEGATION_MARKER}{CN_ATTRIBUTE}");
        !self.base.ends_with(&own_suffix) && !self.base.ends_with(&negated_suffix)
    }
}
