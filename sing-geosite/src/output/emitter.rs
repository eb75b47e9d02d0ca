//! 产物输出：完整数据库 + 中国区域子集数据库 + 每个分类两种变体的规则集
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use sing_geosite_engine::{CategoryMap, RuleCompiler};

use super::path_manager::OutputPathManager;
use crate::codec::{DatabaseCodec, GeositeDbWriter, RuleSetCodec, SrsWriter};
use crate::config::{GeneratorConfig, RuleSetVariant};
use crate::error::{GeoResult, GeositeError};

/// 输出结果统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitReport {
    pub db_path: PathBuf,
    pub cn_db_path: PathBuf,
    /// 每个变体写出的规则集文件数
    pub rule_set_count: usize,
    pub rule_set_dirs: Vec<PathBuf>,
}

/// 产物输出器
#[derive(Debug)]
pub struct Emitter {
    config: GeneratorConfig,
    path_manager: OutputPathManager,
    compiler: RuleCompiler,
    database_codec: Box<dyn DatabaseCodec>,
    rule_set_codec: Box<dyn RuleSetCodec>,
}

impl Emitter {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_codecs(config, Box::new(GeositeDbWriter::new()), Box::new(SrsWriter::new()))
    }

    pub fn with_codecs(
        config: GeneratorConfig,
        database_codec: Box<dyn DatabaseCodec>,
        rule_set_codec: Box<dyn RuleSetCodec>,
    ) -> Self {
        Self {
            config,
            path_manager: OutputPathManager::new(),
            compiler: RuleCompiler::new(),
            database_codec,
            rule_set_codec,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// 写出全部产物，任一失败立即返回
    pub fn emit(&self, map: &CategoryMap) -> GeoResult<EmitReport> {
        let total_start = std::time::Instant::now();

        // 1. 数据库
        self.path_manager.ensure_dir(&self.config.db_out_dir)?;
        let db_path = self.config.db_path();
        self.write_database(&db_path, map)?;

        let cn_map = map.subset(&self.config.cn_codes);
        let cn_db_path = self.config.cn_db_path();
        self.write_database(&cn_db_path, &cn_map)?;

        // 2. 规则集目录（清空重建）
        let rule_set_dirs: Vec<PathBuf> = RuleSetVariant::ALL
            .iter()
            .map(|variant| self.config.rule_set_dir(*variant))
            .collect();
        for dir in &rule_set_dirs {
            self.path_manager.prepare_output_dir(dir)?;
        }

        // 3. 每个分类一个规则集，两种变体
        for (code, items) in map {
            let rule_set = self.compiler.compile_rule_set(items);
            for (variant, dir) in RuleSetVariant::ALL.iter().zip(&rule_set_dirs) {
                let path = self.config.rule_set_file_path(dir, code);
                write_file(&path, |writer| {
                    self.rule_set_codec.write_rule_set(writer, &rule_set, *variant)
                })?;
            }
        }
        log::info!(
            "[OUTPUT] 规则集写出完成 | 分类: {} | 目录: {} | 耗时: {:?}",
            map.len(),
            rule_set_dirs
                .iter()
                .map(|dir| dir.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            total_start.elapsed()
        );

        Ok(EmitReport {
            db_path,
            cn_db_path,
            rule_set_count: map.len(),
            rule_set_dirs,
        })
    }

    fn write_database(&self, path: &Path, map: &CategoryMap) -> GeoResult<()> {
        write_file(path, |writer| self.database_codec.write_database(writer, map))?;
        log::info!("write {}", display_path(path).display());
        Ok(())
    }
}

/// 打开 → 写入 → 刷新 → 关闭；出错时文件句柄随作用域释放
fn write_file<F>(path: &Path, write: F) -> GeoResult<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let to_error = |source: io::Error| GeositeError::OutputWriteError {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).map_err(to_error)?;
    writer.flush().map_err(to_error)
}

/// 日志中尽量展示绝对路径
fn display_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
