//! 二进制编码：sing-box geosite 数据库 + SRS 规则集
pub mod geosite_db;
pub mod srs;
pub mod succinct;
pub mod varbin;

use std::io::{self, Write};

use sing_geosite_engine::{CategoryMap, PlainRuleSet};

use crate::config::RuleSetVariant;

pub use geosite_db::GeositeDbWriter;
pub use srs::SrsWriter;
pub use succinct::{DomainMatcher, SuccinctSet};

/// 多分类数据库编码
pub trait DatabaseCodec: std::fmt::Debug {
    fn write_database(&self, writer: &mut dyn Write, map: &CategoryMap) -> io::Result<()>;
}

/// 单个规则集编码
pub trait RuleSetCodec: std::fmt::Debug {
    fn write_rule_set(
        &self,
        writer: &mut dyn Write,
        rule_set: &PlainRuleSet,
        variant: RuleSetVariant,
    ) -> io::Result<()>;
}
