//! 全局配置管理
pub mod generator;

pub use generator::{GeneratorConfig, GeneratorConfigBuilder, RuleSetVariant};
