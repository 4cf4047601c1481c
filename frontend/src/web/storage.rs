//! LocalStorage 封装模块
//!
//! 直接使用 `web_sys::Storage`，并实现核心层的 [`StorageBackend`]。

use studyta::StorageBackend;
use studyta::error::{StudyError, StudyResult};

/// 浏览器 LocalStorage 后端
///
/// Private browsing modes may refuse access entirely; every call then fails
/// with a storage error and the preference store falls back to defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> StudyResult<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| StudyError::storage("no window object available"))?;
        window
            .local_storage()
            .map_err(|e| StudyError::storage(format!("{:?}", e)))?
            .ok_or_else(|| StudyError::storage("localStorage is disabled"))
    }

    /// 探测存储是否可用
    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> StudyResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StudyError::storage(format!("{:?}", e)).in_op_with("storage.read", key))
    }

    fn write(&self, key: &str, value: &str) -> StudyResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StudyError::storage(format!("{:?}", e)).in_op_with("storage.write", key))
    }

    fn remove(&self, key: &str) -> StudyResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StudyError::storage(format!("{:?}", e)).in_op_with("storage.remove", key))
    }
}
