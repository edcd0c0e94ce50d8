use std::collections::HashMap;

/// 路由记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    /// 路径模式,支持 `:param` 段; 子路由为相对路径
    pub path: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub require_auth: bool,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    pub fn new(path: &'static str, name: &'static str, title: &'static str) -> Self {
        Self {
            path,
            name,
            title,
            require_auth: false,
            children: Vec::new(),
        }
    }

    /// 需要登录 (构建器模式)
    pub fn requires_auth(mut self) -> Self {
        self.require_auth = true;
        self
    }

    /// 设置子路由 (构建器模式)
    pub fn with_children(mut self, children: Vec<RouteRecord>) -> Self {
        self.children = children;
        self
    }
}

/// 路由匹配结果
///
/// `chain` 从父到子排列,元信息按链合并
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub chain: Vec<&'a RouteRecord>,
    pub params: HashMap<String, String>,
}

impl<'a> RouteMatch<'a> {
    /// 最终匹配到的路由
    pub fn record(&self) -> Option<&'a RouteRecord> {
        self.chain.last().copied()
    }

    /// 链上任一路由需要登录即需要登录
    pub fn require_auth(&self) -> bool {
        self.chain.iter().any(|r| r.require_auth)
    }

    /// 链上最后一个非空标题
    pub fn title(&self) -> Option<&'static str> {
        self.chain
            .iter()
            .rev()
            .map(|r| r.title)
            .find(|t| !t.is_empty())
    }
}

/// 看板的路由表
pub fn dashboard_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new("/", "Dashboard", "工具看板"),
        RouteRecord::new("/tool/:id", "ToolDetail", "工具详情"),
        RouteRecord::new("/login", "Login", "管理员登录"),
        RouteRecord::new("/admin", "Admin", "后台管理")
            .requires_auth()
            .with_children(vec![
                RouteRecord::new("tools", "AdminTools", "工具管理"),
                RouteRecord::new("files", "AdminFiles", "文件管理"),
                RouteRecord::new("changelogs", "AdminChangelogs", "变更日志管理"),
            ]),
    ]
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// 按前缀匹配一条路由,返回消费的段数
fn match_prefix(
    pattern: &str,
    segments: &[&str],
    params: &mut HashMap<String, String>,
) -> Option<usize> {
    let pattern_segments = split_segments(pattern);
    if pattern_segments.len() > segments.len() {
        return None;
    }

    let mut captured = Vec::new();
    for (expected, actual) in pattern_segments.iter().zip(segments) {
        if let Some(name) = expected.strip_prefix(':') {
            captured.push((name.to_string(), actual.to_string()));
        } else if expected != actual {
            return None;
        }
    }

    params.extend(captured);
    Some(pattern_segments.len())
}

/// 在路由树中查找完整匹配
pub(crate) fn find_match<'a>(routes: &'a [RouteRecord], segments: &[&str]) -> Option<RouteMatch<'a>> {
    for route in routes {
        let mut params = HashMap::new();
        let Some(consumed) = match_prefix(route.path, segments, &mut params) else {
            continue;
        };
        let rest = &segments[consumed..];

        if rest.is_empty() {
            return Some(RouteMatch {
                chain: vec![route],
                params,
            });
        }

        if let Some(mut child) = find_match(&route.children, rest) {
            child.chain.insert(0, route);
            child.params.extend(params);
            return Some(child);
        }
    }
    None
}

/// 去掉查询串和锚点后切分路径
pub(crate) fn path_segments(full_path: &str) -> Vec<&str> {
    let path = full_path
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    split_segments(path)
}
