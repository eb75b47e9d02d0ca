use std::fmt::{self, Write};

// ======================== 分类代码列表格式化 ========================
/// 逗号拼接代码列表，用于审计输出（不截断）
pub fn join_codes<S: AsRef<str>>(codes: &[S]) -> String {
    let mut result = String::with_capacity(codes.iter().map(|c| c.as_ref().len() + 1).sum());
    for (idx, code) in codes.iter().enumerate() {
        if idx > 0 {
            result.push(',');
        }
        result.push_str(code.as_ref());
    }
    result
}

/// 代码列表日志预览 - 零堆分配
/// 格式：[code1, code2, …] (total: N)
#[inline(always)]
pub fn preview_codes<'a, S: AsRef<str> + 'a>(codes: &'a [S], max_count: usize) -> impl fmt::Display + 'a {
    struct CodesView<'a, S> {
        codes: &'a [S],
        max_count: usize,
    }

    impl<'a, S: AsRef<str>> fmt::Display for CodesView<'a, S> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if self.codes.is_empty() {
                return f.write_str("[empty]");
            }
            f.write_char('[')?;
            for (idx, code) in self.codes.iter().take(self.max_count).enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                f.write_str(code.as_ref())?;
            }
            if self.codes.len() > self.max_count {
                write!(f, ", … (total: {})", self.codes.len())?;
            }
            f.write_char(']')
        }
    }

    CodesView { codes, max_count }
}
