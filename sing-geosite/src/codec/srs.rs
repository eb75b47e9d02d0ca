//! sing-box 二进制规则集（SRS）编码
//!
//! 布局：魔数 `SRS`，版本字节，随后为 zlib 压缩的规则内容
use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use sing_geosite_engine::{HeadlessRule, PlainRuleSet};

use super::succinct::DomainMatcher;
use super::varbin::{write_string_list, write_uvarint};
use super::RuleSetCodec;
use crate::config::RuleSetVariant;

pub const MAGIC_BYTES: [u8; 3] = *b"SRS";

/// 稳定版规则集版本
pub const RULE_SET_VERSION_1: u8 = 1;
/// 不稳定版规则集版本
pub const RULE_SET_VERSION_2: u8 = 2;

const RULE_TYPE_DEFAULT: u8 = 0;

const RULE_ITEM_DOMAIN: u8 = 2;
const RULE_ITEM_DOMAIN_KEYWORD: u8 = 3;
const RULE_ITEM_DOMAIN_REGEX: u8 = 4;
const RULE_ITEM_FINAL: u8 = 0xFF;

#[derive(Debug, Clone, Copy, Default)]
pub struct SrsWriter;

impl SrsWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn version(variant: RuleSetVariant) -> u8 {
        match variant {
            RuleSetVariant::Stable => RULE_SET_VERSION_1,
            RuleSetVariant::Unstable => RULE_SET_VERSION_2,
        }
    }

    fn write_default_rule<W: Write>(
        writer: &mut W,
        rule: &HeadlessRule,
        variant: RuleSetVariant,
    ) -> io::Result<()> {
        writer.write_all(&[RULE_TYPE_DEFAULT])?;
        if !rule.domain.is_empty() || !rule.domain_suffix.is_empty() {
            writer.write_all(&[RULE_ITEM_DOMAIN])?;
            DomainMatcher::new(&rule.domain, &rule.domain_suffix, !variant.is_unstable())
                .write(writer)?;
        }
        if !rule.domain_keyword.is_empty() {
            writer.write_all(&[RULE_ITEM_DOMAIN_KEYWORD])?;
            write_string_list(writer, &rule.domain_keyword)?;
        }
        if !rule.domain_regex.is_empty() {
            writer.write_all(&[RULE_ITEM_DOMAIN_REGEX])?;
            write_string_list(writer, &rule.domain_regex)?;
        }
        writer.write_all(&[RULE_ITEM_FINAL])?;
        writer.write_all(&[rule.invert as u8])
    }
}

impl RuleSetCodec for SrsWriter {
    fn write_rule_set(
        &self,
        writer: &mut dyn Write,
        rule_set: &PlainRuleSet,
        variant: RuleSetVariant,
    ) -> io::Result<()> {
        writer.write_all(&MAGIC_BYTES)?;
        writer.write_all(&[Self::version(variant)])?;

        let mut encoder = ZlibEncoder::new(writer, Compression::best());
        write_uvarint(&mut encoder, rule_set.rules.len() as u64)?;
        for rule in &rule_set.rules {
            Self::write_default_rule(&mut encoder, rule, variant)?;
        }
        encoder.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    fn encode(rule: HeadlessRule, variant: RuleSetVariant) -> (Vec<u8>, Vec<u8>) {
        let mut buf = Vec::new();
        SrsWriter::new()
            .write_rule_set(&mut buf, &PlainRuleSet::single(rule), variant)
            .unwrap();
        let mut payload = Vec::new();
        ZlibDecoder::new(&buf[4..]).read_to_end(&mut payload).unwrap();
        (buf[..4].to_vec(), payload)
    }

    #[test]
    fn test_header_per_variant() {
        let (stable, _) = encode(HeadlessRule::default(), RuleSetVariant::Stable);
        let (unstable, _) = encode(HeadlessRule::default(), RuleSetVariant::Unstable);
        assert_eq!(stable, b"SRS\x01".to_vec());
        assert_eq!(unstable, b"SRS\x02".to_vec());
    }

    #[test]
    fn test_keyword_and_regex_payload() {
        let rule = HeadlessRule {
            domain_keyword: vec!["ad".to_string()],
            domain_regex: vec!["^x$".to_string()],
            ..Default::default()
        };
        let (_, payload) = encode(rule, RuleSetVariant::Stable);
        let mut expected = vec![1u8, RULE_TYPE_DEFAULT];
        expected.extend([RULE_ITEM_DOMAIN_KEYWORD, 1, 2, b'a', b'd']);
        expected.extend([RULE_ITEM_DOMAIN_REGEX, 1, 3, b'^', b'x', b'$']);
        expected.extend([RULE_ITEM_FINAL, 0]);
        assert_eq!(payload, expected);
    }

    #[test]
    fn test_domain_item_uses_matcher() {
        let rule = HeadlessRule {
            domain: vec!["a".to_string()],
            ..Default::default()
        };
        let (_, payload) = encode(rule, RuleSetVariant::Unstable);

        let mut matcher = Vec::new();
        DomainMatcher::new::<&str>(&["a"], &[], false)
            .write(&mut matcher)
            .unwrap();
        let mut expected = vec![1u8, RULE_TYPE_DEFAULT, RULE_ITEM_DOMAIN];
        expected.extend(matcher);
        expected.extend([RULE_ITEM_FINAL, 0]);
        assert_eq!(payload, expected);
    }
}
