//! 生成流程编排：读取 → 解码 → 分类处理 → 输出
use sing_geosite_engine::{CategoryMap, CategoryProcessor, ProcessReport};

use crate::config::GeneratorConfig;
use crate::error::GeoResult;
use crate::output::{EmitReport, Emitter};
use crate::source::{load_source, DatParser, SourceParser};

/// 生成器
#[derive(Debug)]
pub struct Generator {
    parser: Box<dyn SourceParser>,
    processor: CategoryProcessor,
    emitter: Emitter,
}

/// 一次完整生成的结果
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub process: ProcessReport,
    pub emit: EmitReport,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_parser(config, Box::new(DatParser::new()))
    }

    pub fn with_parser(config: GeneratorConfig, parser: Box<dyn SourceParser>) -> Self {
        Self {
            parser,
            processor: CategoryProcessor::new(),
            emitter: Emitter::new(config),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.emitter.config()
    }

    /// 仅执行读取与分类处理，不产生任何输出
    pub fn prepare(&self) -> GeoResult<(CategoryMap, ProcessReport)> {
        let entries = load_source(self.parser.as_ref(), &self.config().dat_in)?;
        let (map, report) = self.processor.process(&entries)?;
        Ok((map, report))
    }

    /// 完整生成；分类处理全部成功之后才会触碰输出目录
    pub fn run(&self) -> GeoResult<GenerateOutcome> {
        let (map, process) = self.prepare()?;
        let emit = self.emitter.emit(&map)?;
        Ok(GenerateOutcome { process, emit })
    }
}
