//! 测试公共模块
//!
//! 提供Mock后端和测试工具。
//! Mock后端基于 tokio TcpListener,按 "方法 路径" 返回预设响应并记录收到的请求,
//! 契约测试因此无需真实的工具看板服务。

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use tool_dashboard::models::ClientConfig;
use tool_dashboard::router::HistoryNavigator;
use tool_dashboard::services::ApiClient;
use tool_dashboard::stores::{KeyValueStore, MemoryStore};

/// 预设响应
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl StubResponse {
    /// 统一响应体 `{code, message, data}`, HTTP状态固定为200
    pub fn envelope(code: i32, message: &str, data: Value) -> Self {
        Self::json(200, json!({ "code": code, "message": message, "data": data }))
    }

    /// 成功响应
    pub fn ok(data: Value) -> Self {
        Self::envelope(200, "操作成功", data)
    }

    pub fn json(status: u16, value: Value) -> Self {
        Self::raw(status, "application/json", value.to_string())
    }

    pub fn raw(status: u16, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: content_type.to_string(),
            body: body.into(),
        }
    }
}

/// 收到的请求
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// 请求目标,含查询串
    pub target: String,
    /// 头部名称统一小写
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, q)| q)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn body_json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("请求体不是JSON")
    }
}

type Routes = Arc<Mutex<HashMap<String, StubResponse>>>;
type Requests = Arc<Mutex<Vec<RecordedRequest>>>;

/// Mock工具看板后端
///
/// 每个连接只处理一个请求,响应后关闭连接。
/// 未注册的路由返回 404 纯文本。
pub struct MockBackend {
    addr: SocketAddr,
    routes: Routes,
    requests: Requests,
}

impl MockBackend {
    /// 在随机端口启动
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("绑定测试端口失败");
        let addr = listener.local_addr().expect("读取测试端口失败");

        let routes: Routes = Arc::new(Mutex::new(HashMap::new()));
        let requests: Requests = Arc::new(Mutex::new(Vec::new()));

        let (accept_routes, accept_requests) = (Arc::clone(&routes), Arc::clone(&requests));
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = Arc::clone(&accept_routes);
                let requests = Arc::clone(&accept_requests);
                tokio::spawn(async move {
                    let _ = serve(stream, routes, requests).await;
                });
            }
        });

        Self {
            addr,
            routes,
            requests,
        }
    }

    /// 接口根地址,形如 `http://127.0.0.1:port/api`
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// 注册路由, `path` 为完整路径 (含 `/api` 前缀,不含查询串)
    pub fn on(&self, method: &str, path: &str, response: StubResponse) {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("{} {}", method, path), response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("Mock后端未收到任何请求")
    }
}

async fn serve(mut stream: TcpStream, routes: Routes, requests: Requests) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let target = request_line.next().unwrap_or_default().to_string();
    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let mut body = buf[header_end..].to_vec();
    let content_length = headers
        .get("content-length")
        .and_then(|v| v.parse::<usize>().ok());
    let chunked = headers
        .get("transfer-encoding")
        .map_or(false, |v| v.eq_ignore_ascii_case("chunked"));

    if let Some(len) = content_length {
        while body.len() < len {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..n]);
        }
        body.truncate(len);
    } else if chunked {
        // 分块编码只读到结束块,正文保留原始分块格式
        while !body.ends_with(b"0\r\n\r\n") {
            let n = stream.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..n]);
        }
    }

    let key = format!("{} {}", method, target.split('?').next().unwrap_or_default());
    let response = routes
        .lock()
        .unwrap()
        .get(&key)
        .cloned()
        .unwrap_or_else(|| StubResponse::raw(404, "text/plain", "not found"));

    requests.lock().unwrap().push(RecordedRequest {
        method,
        target,
        headers,
        body,
    });

    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason_phrase(response.status),
        response.content_type,
        response.body.len()
    );
    stream.write_all(head.as_bytes()).await?;
    stream.write_all(&response.body).await?;
    stream.shutdown().await
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// 契约测试上下文
///
/// 内存存储和内存导航历史注入 `ApiClient`,测试可直接检查两者的状态
pub struct TestContext {
    pub backend: MockBackend,
    pub storage: Arc<MemoryStore>,
    pub navigator: Arc<HistoryNavigator>,
    pub client: Arc<ApiClient>,
}

impl TestContext {
    pub async fn new() -> Self {
        let backend = MockBackend::start().await;
        let storage = Arc::new(MemoryStore::new());
        let navigator = Arc::new(HistoryNavigator::new());
        let client = Arc::new(
            ApiClient::new(
                ClientConfig::new(backend.base_url()).with_timeout_secs(5),
                storage.clone(),
                navigator.clone(),
            )
            .expect("创建ApiClient失败"),
        );

        Self {
            backend,
            storage,
            navigator,
            client,
        }
    }

    /// 写入token,模拟已登录
    pub fn login_as(&self, token: &str) {
        self.storage
            .set(tool_dashboard::stores::TOKEN_KEY, token)
            .expect("写入token失败");
    }
}
