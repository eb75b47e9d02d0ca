//! sing-box geosite.db 编码
//!
//! 布局：版本字节 `0`，分类数 (uvarint)，按代码排序的索引
//! `(code, 内容偏移, 条目数)`，随后是所有分类的 `(类型字节, value)` 内容块
use std::io::{self, Write};

use sing_geosite_engine::CategoryMap;

use super::varbin::{write_string, write_uvarint};
use super::DatabaseCodec;

const DATABASE_VERSION: u8 = 0;

#[derive(Debug, Clone, Copy, Default)]
pub struct GeositeDbWriter;

impl GeositeDbWriter {
    pub fn new() -> Self {
        Self
    }
}

impl DatabaseCodec for GeositeDbWriter {
    fn write_database(&self, writer: &mut dyn Write, map: &CategoryMap) -> io::Result<()> {
        // CategoryMap 已按代码排序
        let mut content: Vec<u8> = Vec::new();
        let mut index: Vec<(&str, usize, usize)> = Vec::with_capacity(map.len());
        for (code, items) in map {
            index.push((code.as_str(), content.len(), items.len()));
            for item in items {
                content.push(item.item_type.as_u8());
                write_string(&mut content, &item.value)?;
            }
        }

        writer.write_all(&[DATABASE_VERSION])?;
        write_uvarint(writer, index.len() as u64)?;
        for (code, offset, count) in index {
            write_string(writer, code)?;
            write_uvarint(writer, offset as u64)?;
            write_uvarint(writer, count as u64)?;
        }
        writer.write_all(&content)
    }
}
