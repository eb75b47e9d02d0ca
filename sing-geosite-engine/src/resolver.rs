//! 影子分类处理
//!
//! 针对所有 `<base>@<attr>` 属性分类：
//! - 属性等于 base 尾片段：与基础分类重复，直接删除
//! - 属性与尾片段仅差前导 `!`：否定对，从 base 中扣除该属性分类后删除
use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use crate::core::{CategoryCode, CategoryMap, RuleItem};
use crate::report::ShadowReport;
use crate::{CoreError, CoreResult};

/// 否定对：`bad` 中的规则项需要从 `base` 中扣除
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShadowPair {
    pub base: String,
    pub bad: String,
}

/// 影子分类处理计划（代码均已排序）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadowPlan {
    /// 纯重复的属性分类
    pub duplicates: Vec<String>,
    /// 否定对
    pub negations: Vec<ShadowPair>,
}

impl ShadowPlan {
    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty() && self.negations.is_empty()
    }
}

/// 影子分类处理器
#[derive(Debug, Clone, Copy, Default)]
pub struct ShadowResolver;

impl ShadowResolver {
    pub fn new() -> Self {
        Self
    }

    /// 扫描并处理，返回报告
    pub fn resolve(&self, map: &mut CategoryMap) -> CoreResult<ShadowReport> {
        let plan = self.plan(map);
        self.apply(&plan, map)
    }

    /// 仅做分类判断，不修改映射
    pub fn plan(&self, map: &CategoryMap) -> ShadowPlan {
        let mut plan = ShadowPlan::default();
        for (code, _) in map {
            let parsed = CategoryCode::parse(code);
            if !parsed.is_qualified() {
                continue;
            }
            if parsed.is_pure_duplicate() {
                plan.duplicates.push(code.clone());
            } else if parsed.is_negation_pair() {
                plan.negations.push(ShadowPair {
                    base: parsed.base.to_string(),
                    bad: code.clone(),
                });
            }
        }
        // 映射本身有序，这里排序只为应对外部构造的计划
        plan.duplicates.sort();
        plan.negations.sort();
        plan
    }

    /// 执行计划
    ///
    /// 所有 bad 列表在修改任何 base 之前取出；同一 base 的多个否定对
    /// 合并为一次集合差运算，结果与处理顺序无关。
    /// bad 分类或 base 分类缺失时返回错误，此时映射不做任何修改。
    pub fn apply(&self, plan: &ShadowPlan, map: &mut CategoryMap) -> CoreResult<ShadowReport> {
        // base → 需要扣除的规则项
        let mut masks: BTreeMap<&str, FxHashSet<RuleItem>> = BTreeMap::new();
        for pair in &plan.negations {
            let bad_list = map
                .get(&pair.bad)
                .ok_or_else(|| CoreError::MissingShadowCategory(pair.bad.clone()))?;
            if !map.contains(&pair.base) {
                return Err(CoreError::MissingShadowCategory(format!(
                    "{} (base of {})",
                    pair.base, pair.bad
                )));
            }
            log::debug!(
                "[SHADOW] 否定对 {} → {} | 扣除规则项: {}",
                pair.bad,
                pair.base,
                bad_list.len()
            );
            masks
                .entry(pair.base.as_str())
                .or_default()
                .extend(bad_list.iter().cloned());
        }

        for code in &plan.duplicates {
            map.remove(code);
        }

        for pair in &plan.negations {
            map.remove(&pair.bad);
        }

        for (base, mask) in masks {
            if let Some(items) = map.get_mut(base) {
                let before = items.len();
                items.retain(|item| !mask.contains(item));
                log::debug!(
                    "[SHADOW] {} 扣除完成 | {} → {}",
                    base,
                    before,
                    items.len()
                );
            }
        }

        let report = ShadowReport {
            filtered: plan.duplicates.clone(),
            merged: plan.negations.iter().map(|pair| pair.bad.clone()).collect(),
        };
        Ok(report)
    }
}
