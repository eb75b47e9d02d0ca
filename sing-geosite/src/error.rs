//! 全局错误类型定义
use prost::DecodeError;
use sing_geosite_engine::CoreError;
use std::io::Error as IoError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeositeError {
    // 源数据相关错误
    #[error("源数据读取失败：{path}：{source}")]
    SourceReadError {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("源数据解码失败：{0}")]
    DecodeError(#[from] DecodeError),

    // 分类处理错误
    #[error("分类处理失败：{0}")]
    CoreError(#[from] CoreError),

    // 输出相关错误
    #[error("输出目录准备失败：{path}：{source}")]
    OutputDirError {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("输出文件写入失败：{path}：{source}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: IoError,
    },
}

// 全局Result类型
pub type GeoResult<T> = Result<T, GeositeError>;
