use crate::{
    builder::CategoryBuilder,
    core::{CategoryMap, SourceEntry},
    merger::CategoryMerger,
    report::{MergeReport, ProcessReport, ShadowReport},
    resolver::ShadowResolver,
    CoreResult,
};

/// 分类处理器，核心职责：构建分类 + 影子分类处理 + 区域合并
///
/// 分类映射按所有权在各阶段之间传递，处理完成后以不可变形式交给输出层
#[derive(Debug, Clone, Default)]
pub struct CategoryProcessor {
    builder: CategoryBuilder,
    resolver: ShadowResolver,
    merger: CategoryMerger,
}

impl CategoryProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 构建 → 影子分类处理 → 区域合并
    pub fn process(&self, entries: &[SourceEntry]) -> CoreResult<(CategoryMap, ProcessReport)> {
        let total_start = std::time::Instant::now();
        log::info!("[PROCESS] 开始处理分类 | 源条目: {}", entries.len());

        let map = self.builder.build(entries);
        let built_categories = map.len();

        let (map, shadow) = self.resolve(map)?;
        let (map, merge) = self.merge(map);

        let report = ProcessReport {
            entries: entries.len(),
            built_categories,
            categories: map.len(),
            shadow,
            merge,
        };
        report.print_stats();
        log::debug!("[PROCESS] 分类处理耗时: {:?}", total_start.elapsed());
        Ok((map, report))
    }

    /// 影子分类处理阶段
    pub fn resolve(&self, mut map: CategoryMap) -> CoreResult<(CategoryMap, ShadowReport)> {
        let report = self.resolver.resolve(&mut map)?;
        Ok((map, report))
    }

    /// 区域合并阶段
    pub fn merge(&self, mut map: CategoryMap) -> (CategoryMap, MergeReport) {
        let report = self.merger.merge(&mut map);
        (map, report)
    }
}
