//! 域名匹配器的简洁字典树（LOUDS 编码）
//!
//! 域名按字符反转后排序建树，读取端按反转后的查询域名逐字节下行。
//! 后缀规则带标记前缀：`\r` 表示带前导点的后缀，`\n` 表示根后缀。
use std::io::{self, Write};

use rustc_hash::FxHashSet;

use super::varbin::{write_bytes, write_u64_list};

const MATCHER_VERSION: u8 = 1;
const PREFIX_LABEL: char = '\r';
const ROOT_LABEL: char = '\n';

/// 简洁字典树
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuccinctSet {
    pub leaves: Vec<u64>,
    pub label_bitmap: Vec<u64>,
    pub labels: Vec<u8>,
}

#[derive(Clone, Copy)]
struct QueueElement {
    start: usize,
    end: usize,
    col: usize,
}

fn set_bit(bitmap: &mut Vec<u64>, i: usize, value: bool) {
    while i >> 6 >= bitmap.len() {
        bitmap.push(0);
    }
    if value {
        bitmap[i >> 6] |= 1u64 << (i & 63);
    }
}

impl SuccinctSet {
    /// `keys` 必须已排序且无重复
    pub fn new<S: AsRef<[u8]>>(keys: &[S]) -> Self {
        let mut set = SuccinctSet::default();
        if keys.is_empty() {
            return set;
        }
        let key = |idx: usize| keys[idx].as_ref();

        let mut label_idx = 0;
        let mut queue = vec![QueueElement {
            start: 0,
            end: keys.len(),
            col: 0,
        }];
        let mut i = 0;
        while i < queue.len() {
            let mut elt = queue[i];
            if elt.col == key(elt.start).len() {
                elt.start += 1;
                set_bit(&mut set.leaves, i, true);
            }
            let mut j = elt.start;
            while j < elt.end {
                let from = j;
                let label = key(from)[elt.col];
                while j < elt.end && key(j)[elt.col] == label {
                    j += 1;
                }
                queue.push(QueueElement {
                    start: from,
                    end: j,
                    col: elt.col + 1,
                });
                set.labels.push(label);
                set_bit(&mut set.label_bitmap, label_idx, false);
                label_idx += 1;
            }
            set_bit(&mut set.label_bitmap, label_idx, true);
            label_idx += 1;
            i += 1;
        }
        set
    }
}

/// 按字符反转
fn reverse_domain(domain: &str) -> String {
    domain.chars().rev().collect()
}

/// 精确域名 + 后缀域名的组合匹配器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMatcher {
    set: SuccinctSet,
}

impl DomainMatcher {
    /// `legacy` 为 true 时，不带前导点的后缀展开为"精确 + 带点后缀"两条，
    /// 兼容不识别根后缀标记的旧版读取端
    pub fn new<S: AsRef<str>>(domains: &[S], domain_suffixes: &[S], legacy: bool) -> Self {
        let mut keys: Vec<String> = Vec::with_capacity(domains.len() + 2 * domain_suffixes.len());
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for suffix in domain_suffixes {
            let suffix = suffix.as_ref();
            if !seen.insert(suffix.to_string()) {
                continue;
            }
            if suffix.starts_with('.') {
                keys.push(reverse_domain(&format!("{PREFIX_LABEL}{suffix}")));
            } else if legacy {
                keys.push(reverse_domain(suffix));
                let dotted = format!(".{suffix}");
                if seen.insert(dotted.clone()) {
                    keys.push(reverse_domain(&format!("{PREFIX_LABEL}{dotted}")));
                }
            } else {
                keys.push(reverse_domain(&format!("{ROOT_LABEL}{suffix}")));
            }
        }
        for domain in domains {
            let domain = domain.as_ref();
            if seen.insert(domain.to_string()) {
                keys.push(reverse_domain(domain));
            }
        }

        keys.sort();
        keys.dedup();
        Self {
            set: SuccinctSet::new(&keys),
        }
    }

    pub fn set(&self) -> &SuccinctSet {
        &self.set
    }

    pub fn write<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&[MATCHER_VERSION])?;
        write_u64_list(writer, &self.set.leaves)?;
        write_u64_list(writer, &self.set.label_bitmap)?;
        write_bytes(writer, &self.set.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succinct_set_layout() {
        let set = SuccinctSet::new(&["ab", "ac"]);
        assert_eq!(set.labels, b"abc".to_vec());
        // 标签位图：第 1、4、5、6 位为节点结束标记
        assert_eq!(set.label_bitmap, vec![0b111_0010]);
        // 叶子位图：第 2、3 个节点为叶子
        assert_eq!(set.leaves, vec![0b1100]);
    }

    #[test]
    fn test_empty_set() {
        let set = SuccinctSet::new::<&str>(&[]);
        assert_eq!(set, SuccinctSet::default());
    }

    #[test]
    fn test_matcher_keys() {
        let matcher = DomainMatcher::new(&["a.b"], &[".a.b"], false);
        // 反转后："b.a"、"b.a.\r"，共享前缀 "b.a"
        assert_eq!(matcher.set().labels, b"b.a.\r".to_vec());
        assert_eq!(matcher.set().leaves.len(), 1);
    }

    #[test]
    fn test_legacy_expands_root_suffix() {
        let legacy = DomainMatcher::new::<&str>(&[], &["cn"], true);
        let compact = DomainMatcher::new::<&str>(&[], &["cn"], false);
        // 旧版："nc" + "nc.\r"；新版："nc\n"
        assert_eq!(legacy.set().labels, b"nc.\r".to_vec());
        assert_eq!(compact.set().labels, b"nc\n".to_vec());
    }

    #[test]
    fn test_write_layout() {
        let matcher = DomainMatcher::new::<&str>(&["a"], &[], false);
        let mut buf = Vec::new();
        matcher.write(&mut buf).unwrap();
        // 版本 + leaves(1 word) + bitmap(1 word) + labels
        assert_eq!(buf[0], MATCHER_VERSION);
        assert_eq!(buf[1], 1);
        assert_eq!(&buf[2..10], &0b10u64.to_be_bytes());
        assert_eq!(buf[10], 1);
        assert_eq!(&buf[11..19], &0b110u64.to_be_bytes());
        assert_eq!(&buf[19..], &[1, b'a']);
    }
}
