use std::sync::RwLock;

/// 导航能力
///
/// 替代 `document.title` 与 `window.location` 的直接操作
pub trait Navigator: Send + Sync {
    /// 设置文档标题
    fn set_title(&self, title: &str);

    /// 跳转到指定地址
    fn push(&self, path: &str);
}

/// 内存中的导航历史
///
/// 记录每一次跳转和当前标题,供无界面环境和测试使用
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    title: RwLock<String>,
    history: RwLock<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> String {
        self.title.read().map(|t| t.clone()).unwrap_or_default()
    }

    /// 当前地址
    pub fn current(&self) -> Option<String> {
        self.history.read().ok()?.last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.read().map(|h| h.clone()).unwrap_or_default()
    }
}

impl Navigator for HistoryNavigator {
    fn set_title(&self, title: &str) {
        if let Ok(mut current) = self.title.write() {
            *current = title.to_string();
        }
    }

    fn push(&self, path: &str) {
        if let Ok(mut history) = self.history.write() {
            history.push(path.to_string());
        }
    }
}
