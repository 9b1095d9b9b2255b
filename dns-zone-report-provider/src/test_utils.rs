//! 测试辅助模块
//!
//! 提供可编排响应的 mock transport 和 Cloudflare 响应体构造方法。

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::http_client::{HttpResponse, HttpTransport, TransportError};
use crate::providers::CloudflareProvider;

// ===== MockTransport =====

/// 按顺序返回预设响应，并记录每次请求的 URL 与 token。
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<(String, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn push_ok(&self, body: Value) {
        self.push(Ok(HttpResponse::new(200, body.to_string())));
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn requested_tokens(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, token)| token.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str, bearer_token: &str) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), bearer_token.to_string()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
    }
}

// ===== 工厂方法 =====

pub const TEST_BASE: &str = "https://cf.test/client/v4";

/// 创建使用 mock transport 的 `CloudflareProvider`
pub fn create_test_provider() -> (CloudflareProvider, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    let provider = CloudflareProvider::with_transport(transport.clone(), "test-token".to_string())
        .with_base_url(TEST_BASE);
    (provider, transport)
}

/// 一页 Cloudflare 成功响应
pub fn page_body(items: Vec<Value>, page: u32, total_pages: u32) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": items,
        "result_info": {
            "page": page,
            "per_page": 50,
            "count": 0,
            "total_count": 0,
            "total_pages": total_pages
        }
    })
}

pub fn raw_zone(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name, "status": "active", "paused": false })
}

pub fn raw_record(id: &str, record_type: &str, name: &str, content: &str) -> Value {
    json!({
        "id": id,
        "type": record_type,
        "name": name,
        "content": content,
        "ttl": 1,
        "proxied": false
    })
}
