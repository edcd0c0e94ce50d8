use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::stores::KeyValueStore;

/// 主题的存储键
pub const THEME_KEY: &str = "theme";

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    Light,
    /// 默认为黑橙主题
    #[default]
    Dark,
}

impl ThemeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeType::Light => "light",
            ThemeType::Dark => "dark",
        }
    }

    /// 解析存储值,无法识别时返回 `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeType::Light),
            "dark" => Some(ThemeType::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeType::Light => ThemeType::Dark,
            ThemeType::Dark => ThemeType::Light,
        }
    }

    /// 兼容某些组件的class名
    pub fn class_name(&self) -> &'static str {
        match self {
            ThemeType::Light => "light-theme",
            ThemeType::Dark => "dark-theme",
        }
    }
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 主题应用目标
///
/// 替代对 `document.documentElement` 的直接操作
pub trait ThemeTarget: Send + Sync {
    fn set_attribute(&self, name: &str, value: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// 文档根元素的内存模型
///
/// 记录属性和class,供无界面环境使用
#[derive(Debug, Default)]
pub struct DocumentAttributes {
    attributes: RwLock<HashMap<String, String>>,
    classes: RwLock<BTreeSet<String>>,
}

impl DocumentAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.read().ok()?.get(name).cloned()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes
            .read()
            .map(|classes| classes.contains(class))
            .unwrap_or(false)
    }
}

impl ThemeTarget for DocumentAttributes {
    fn set_attribute(&self, name: &str, value: &str) {
        if let Ok(mut attributes) = self.attributes.write() {
            attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn add_class(&self, class: &str) {
        if let Ok(mut classes) = self.classes.write() {
            classes.insert(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        if let Ok(mut classes) = self.classes.write() {
            classes.remove(class);
        }
    }
}

/// 主题状态存储
pub struct ThemeStore {
    storage: Arc<dyn KeyValueStore>,
    target: Arc<dyn ThemeTarget>,
    theme: RwLock<ThemeType>,
}

impl ThemeStore {
    /// 从键值存储读取主题,缺失或无法识别时使用默认主题
    pub fn new(storage: Arc<dyn KeyValueStore>, target: Arc<dyn ThemeTarget>) -> Self {
        let theme = storage
            .get(THEME_KEY)
            .and_then(|value| ThemeType::parse(&value))
            .unwrap_or_default();
        Self {
            storage,
            target,
            theme: RwLock::new(theme),
        }
    }

    pub fn theme(&self) -> ThemeType {
        self.theme.read().map(|t| *t).unwrap_or_default()
    }

    /// 切换主题
    pub fn toggle_theme(&self) -> ThemeType {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }

    /// 设置主题
    ///
    /// 保存到键值存储并应用到文档
    pub fn set_theme(&self, theme: ThemeType) {
        if let Ok(mut current) = self.theme.write() {
            *current = theme;
        }
        if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()) {
            tracing::error!(theme = %theme, error = %e, "主题保存失败");
        }
        self.apply_theme();
        tracing::info!(theme = %theme, "主题已切换");
    }

    /// 初始化主题
    pub fn init_theme(&self) {
        self.apply_theme();
    }

    fn apply_theme(&self) {
        let theme = self.theme();
        self.target.set_attribute("data-theme", theme.as_str());
        self.target.add_class(theme.class_name());
        self.target.remove_class(theme.toggled().class_name());
    }
}
