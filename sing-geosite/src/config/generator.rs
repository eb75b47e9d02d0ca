//! 生成器配置：输入路径 + 输出位置 + 固定产物命名

use std::path::{Path, PathBuf};

use sing_geosite_engine::GEOLOCATION_CN;

/// 规则集二进制变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSetVariant {
    /// 稳定版（兼容旧版本解析器）
    Stable,
    /// 不稳定版（紧凑编码）
    Unstable,
}

impl RuleSetVariant {
    pub const ALL: [RuleSetVariant; 2] = [RuleSetVariant::Stable, RuleSetVariant::Unstable];

    pub fn is_unstable(self) -> bool {
        matches!(self, RuleSetVariant::Unstable)
    }
}

/// 生成器配置
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// dlc.dat 路径（github.com/v2fly/domain-list-community）
    pub dat_in: PathBuf,
    /// 数据库输出目录
    pub db_out_dir: PathBuf,
    /// 规则集输出目录
    pub rule_set_out_dir: PathBuf,
    /// 完整数据库文件名
    pub db_file_name: String,
    /// 中国区域子集数据库文件名
    pub cn_db_file_name: String,
    /// 稳定版规则集目录名
    pub rule_set_dir_name: String,
    /// 不稳定版规则集目录名
    pub rule_set_unstable_dir_name: String,
    /// 中国区域子集包含的分类代码
    pub cn_codes: Vec<String>,
    /// 规则集文件名前缀
    pub rule_set_file_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dat_in: PathBuf::from("dlc.dat"),
            db_out_dir: PathBuf::from("."),
            rule_set_out_dir: PathBuf::from("."),
            db_file_name: "geosite.db".to_string(),
            cn_db_file_name: "geosite-cn.db".to_string(),
            rule_set_dir_name: "rule-set".to_string(),
            rule_set_unstable_dir_name: "rule-set-unstable".to_string(),
            cn_codes: vec![GEOLOCATION_CN.to_string()],
            rule_set_file_prefix: "geosite-".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// 规则集文件扩展名
    pub const RULE_SET_EXTENSION: &'static str = "srs";

    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    pub fn db_path(&self) -> PathBuf {
        self.db_out_dir.join(&self.db_file_name)
    }

    pub fn cn_db_path(&self) -> PathBuf {
        self.db_out_dir.join(&self.cn_db_file_name)
    }

    pub fn rule_set_dir(&self, variant: RuleSetVariant) -> PathBuf {
        let name = match variant {
            RuleSetVariant::Stable => &self.rule_set_dir_name,
            RuleSetVariant::Unstable => &self.rule_set_unstable_dir_name,
        };
        self.rule_set_out_dir.join(name)
    }

    /// `<dir>/geosite-<code>.srs`
    pub fn rule_set_file_path(&self, dir: &Path, code: &str) -> PathBuf {
        dir.join(format!(
            "{}{}.{}",
            self.rule_set_file_prefix,
            code,
            Self::RULE_SET_EXTENSION
        ))
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dat_in(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dat_in = path.into();
        self
    }

    pub fn db_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.db_out_dir = dir.into();
        self
    }

    pub fn rule_set_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.rule_set_out_dir = dir.into();
        self
    }

    pub fn cn_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.cn_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}
