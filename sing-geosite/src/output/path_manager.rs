use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{GeoResult, GeositeError};

/// 输出路径管理器
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputPathManager;

impl OutputPathManager {
    pub fn new() -> Self {
        Self
    }

    /// 清空并重建目录（破坏性操作）
    ///
    /// 目录不存在时直接创建；重复调用结果一致
    pub fn prepare_output_dir(&self, dir: &Path) -> GeoResult<()> {
        let to_error = |source: std::io::Error| GeositeError::OutputDirError {
            path: dir.to_path_buf(),
            source,
        };
        match fs::remove_dir_all(dir) {
            Ok(()) => log::debug!("[OUTPUT] 已清空目录 {}", dir.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(to_error(e)),
        }
        fs::create_dir_all(dir).map_err(to_error)
    }

    /// 确保目录存在（非破坏性）
    pub fn ensure_dir(&self, dir: &Path) -> GeoResult<()> {
        fs::create_dir_all(dir).map_err(|source| GeositeError::OutputDirError {
            path: dir.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_missing_dir() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("rule-set").join("nested");
        OutputPathManager::new().prepare_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_prepare_wipes_existing_content_and_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("rule-set");
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("geosite-old.srs"), b"stale").unwrap();

        let manager = OutputPathManager::new();
        manager.prepare_output_dir(&dir).unwrap();
        manager.prepare_output_dir(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }
}
