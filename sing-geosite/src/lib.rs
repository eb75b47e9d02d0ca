//! sing-geosite - v2fly dlc.dat → sing-box geosite 数据库 / 规则集

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod source;

// 导出全局错误类型
pub use self::error::{GeoResult, GeositeError};

// 导出配置与命令行
pub use crate::cli::CliArgs;
pub use crate::config::{GeneratorConfig, GeneratorConfigBuilder, RuleSetVariant};

// 导出编码、输出与流程
pub use crate::codec::{DatabaseCodec, GeositeDbWriter, RuleSetCodec, SrsWriter};
pub use crate::output::{EmitReport, Emitter, OutputPathManager};
pub use crate::pipeline::{GenerateOutcome, Generator};
pub use crate::source::{load_source, DatParser, SourceFileType, SourceParser};

// 内核类型
pub use sing_geosite_engine as engine;
