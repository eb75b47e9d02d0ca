//! sing-geosite-engine 内核错误定义
//! 封装内核层所有错误，与 I/O 层错误解耦，基于thiserror实现类型安全处理
use thiserror::Error;

/// 内核核心错误枚举
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================== 分类影子相关错误 =====================
    /// 否定对所需的分类缺失（数据集结构异常，不可恢复）
    #[error("Shadow category not found: {0}")]
    MissingShadowCategory(String),
}

/// 内核层全局Result类型别名
pub type CoreResult<T> = Result<T, CoreError>;
