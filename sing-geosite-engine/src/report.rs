//! 处理报告：记录被过滤/合并的分类代码，供审计输出
use std::fmt::{Display, Formatter};

use crate::utils::join_codes;

/// 影子分类处理报告
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadowReport {
    /// 与基础分类重复而被删除的属性分类（已排序）
    pub filtered: Vec<String>,
    /// 作为否定对被扣除后删除的属性分类（已排序）
    pub merged: Vec<String>,
}

impl Display for ShadowReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "filtered {}", join_codes(&self.filtered))?;
        write!(f, "merged {}", join_codes(&self.merged))
    }
}

/// 区域分类合并报告
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// 合并目标分类
    pub target: String,
    /// 并入目标的分类（已排序）
    pub merged: Vec<String>,
    /// 合并后目标分类的规则项数
    pub item_count: usize,
}

impl Display for MergeReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "merged cn categories: {}", join_codes(&self.merged))
    }
}

/// 完整处理流程报告
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// 源条目数
    pub entries: usize,
    /// 构建后的分类数
    pub built_categories: usize,
    /// 处理完成后的分类数
    pub categories: usize,
    pub shadow: ShadowReport,
    pub merge: MergeReport,
}

impl ProcessReport {
    /// 结构化日志输出
    pub fn print_stats(&self) {
        log::info!("{}", self.shadow);
        log::info!("{}", self.merge);
        log::debug!(
            "Category processing completed | Entries: {} | Built: {} | Final: {} | Filtered: {} | Merged: {} | {} items: {}",
            self.entries,
            self.built_categories,
            self.categories,
            self.shadow.filtered.len(),
            self.shadow.merged.len(),
            self.merge.target,
            self.merge.item_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_report_display() {
        let report = ShadowReport {
            filtered: vec!["a-cn@cn".into(), "b-cn@cn".into()],
            merged: vec!["geolocation-!cn@cn".into()],
        };
        assert_eq!(
            report.to_string(),
            "filtered a-cn@cn,b-cn@cn\nmerged geolocation-!cn@cn"
        );
    }

    #[test]
    fn test_merge_report_display() {
        let report = MergeReport {
            target: "geolocation-cn".into(),
            merged: vec!["category-ads@cn".into(), "category-games@cn".into()],
            item_count: 3,
        };
        assert_eq!(
            report.to_string(),
            "merged cn categories: category-ads@cn,category-games@cn"
        );
    }
}
