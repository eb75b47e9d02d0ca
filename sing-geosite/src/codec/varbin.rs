//! 变长整数与长度前缀编码（unsigned LEB128，与 Go encoding/binary 的 Uvarint 一致）
use std::io::{self, Write};

pub fn write_uvarint<W: Write + ?Sized>(writer: &mut W, mut value: u64) -> io::Result<()> {
    let mut buf = [0u8; 10];
    let mut len = 0;
    while value >= 0x80 {
        buf[len] = (value as u8) | 0x80;
        value >>= 7;
        len += 1;
    }
    buf[len] = value as u8;
    writer.write_all(&buf[..=len])
}

/// 长度前缀字节串
pub fn write_bytes<W: Write + ?Sized>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
    write_uvarint(writer, bytes.len() as u64)?;
    writer.write_all(bytes)
}

pub fn write_string<W: Write + ?Sized>(writer: &mut W, value: &str) -> io::Result<()> {
    write_bytes(writer, value.as_bytes())
}

/// 数量前缀 + 逐个长度前缀字符串
pub fn write_string_list<W: Write + ?Sized, S: AsRef<str>>(writer: &mut W, values: &[S]) -> io::Result<()> {
    write_uvarint(writer, values.len() as u64)?;
    for value in values {
        write_string(writer, value.as_ref())?;
    }
    Ok(())
}

/// 数量前缀 + 大端 u64
pub fn write_u64_list<W: Write + ?Sized>(writer: &mut W, values: &[u64]) -> io::Result<()> {
    write_uvarint(writer, values.len() as u64)?;
    for value in values {
        writer.write_all(&value.to_be_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: u64) -> Vec<u8> {
        let mut buf = Vec::new();
        write_uvarint(&mut buf, value).unwrap();
        buf
    }

    #[test]
    fn test_uvarint() {
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(127), vec![0x7f]);
        assert_eq!(encode(128), vec![0x80, 0x01]);
        assert_eq!(encode(300), vec![0xac, 0x02]);
        assert_eq!(encode(u64::MAX).len(), 10);
    }

    #[test]
    fn test_string_and_lists() {
        let mut buf = Vec::new();
        write_string_list(&mut buf, &["ab", ""]).unwrap();
        assert_eq!(buf, vec![2, 2, b'a', b'b', 0]);

        let mut buf = Vec::new();
        write_u64_list(&mut buf, &[1]).unwrap();
        assert_eq!(buf, vec![1, 0, 0, 0, 0, 0, 0, 0, 1]);
    }
}
