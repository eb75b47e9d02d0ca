//! 命令行参数定义

use clap::Parser;
use std::path::PathBuf;

use crate::config::GeneratorConfig;

/// Convert v2fly dlc.dat into sing-box geosite databases and rule-sets.
#[derive(Parser, Debug, Clone)]
#[command(name = "sing-geosite", version, about)]
pub struct CliArgs {
    /// Path to the dlc.dat (github.com/v2fly/domain-list-community).
    #[arg(long = "dat-in", default_value = "dlc.dat")]
    pub dat_in: PathBuf,

    /// Output path to the sing-box db.
    #[arg(long = "sdb-out", default_value = ".")]
    pub sdb_out: PathBuf,

    /// Output path to the sing-box rule-set.
    #[arg(long = "srs-out", default_value = ".")]
    pub srs_out: PathBuf,

    /// Log level (overridden by RUST_LOG).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl CliArgs {
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig::builder()
            .dat_in(&self.dat_in)
            .db_out_dir(&self.sdb_out)
            .rule_set_out_dir(&self.srs_out)
            .build()
    }
}
