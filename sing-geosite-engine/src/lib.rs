// 核心公共结构体+枚举
pub mod core;
// 单条源域名 → 规则项
pub mod classifier;
// 按分类代码聚合规则项
pub mod builder;
// 影子分类（重复/否定对）处理
pub mod resolver;
// 区域聚合分类合并
pub mod merger;
// 规则项 → headless 规则
pub mod compiler;
// 构建+处理+合并串联
pub mod processor;
// 处理报告
pub mod report;
// 日志格式化工具
pub mod utils;

mod error;

pub use error::{CoreError, CoreResult};

// 顶层导出常用类型
pub use core::{
    dedup_items, CategoryCode, CategoryMap, RuleItem, RuleItemType, SourceDomain,
    SourceDomainType, SourceEntry,
};
pub use builder::CategoryBuilder;
pub use classifier::RuleClassifier;
pub use compiler::{HeadlessRule, PlainRuleSet, RuleCompiler};
pub use merger::{CategoryMerger, CATEGORY_PREFIX, CN_ATTRIBUTE, GEOLOCATION_CN};
pub use processor::CategoryProcessor;
pub use report::{MergeReport, ProcessReport, ShadowReport};
pub use resolver::{ShadowPair, ShadowPlan, ShadowResolver};
