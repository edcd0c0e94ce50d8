use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::models::StorageError;

/// 键值持久化能力
///
/// 替代浏览器的 localStorage: 会话token、用户名和主题都通过它读写,
/// 使依赖它的逻辑可以脱离真实浏览器环境测试。
pub trait KeyValueStore: Send + Sync {
    /// 读取值,不存在时返回 `None`
    fn get(&self, key: &str) -> Option<String>;

    /// 写入值
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// 删除值,键不存在时不报错
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// 内存存储
///
/// 进程内有效,适用于测试和无需持久化的场景
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// 文件存储
///
/// 以单个JSON对象文件持久化全部键值,每次写入后整体落盘。
/// 默认位置: `<data_dir>/tool-dashboard/store.json`
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// 打开存储文件
    ///
    /// 文件不存在时以空存储开始,首次写入时创建。
    ///
    /// # 错误
    /// - `StorageError::Io`: 文件存在但无法读取
    /// - `StorageError::SerializationError`: 文件内容不是合法的JSON对象
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            HashMap::new()
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "本地存储已加载");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// 默认存储文件路径
    ///
    /// # 错误
    /// 返回 `StorageError::NotFound` 如果系统数据目录无法确定
    pub fn default_path() -> Result<PathBuf, StorageError> {
        dirs::data_dir()
            .map(|dir| dir.join("tool-dashboard").join("store.json"))
            .ok_or_else(|| StorageError::NotFound("无法确定系统数据目录".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "写入本地存储失败");
            StorageError::from(e)
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}
