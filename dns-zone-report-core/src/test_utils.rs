//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dns_zone_report_provider::{DnsProvider, DnsRecord, ProviderError, Zone};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{
    ProgressReporter, ProviderFactory, ReportSink, SheetId, StaticCredentialProvider,
};

// ===== MockProvider =====

#[derive(Default)]
struct MockProviderState {
    zones: Option<Result<Vec<Zone>, ProviderError>>,
    records: HashMap<String, Result<Vec<DnsRecord>, ProviderError>>,
    calls: usize,
    requested_zone_ids: Vec<String>,
}

/// 返回预设结果的 provider；clone 共享同一份状态。
#[derive(Clone, Default)]
pub struct MockProvider {
    state: Arc<Mutex<MockProviderState>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_zones(&self, zones: Result<Vec<Zone>, ProviderError>) {
        self.state.lock().unwrap().zones = Some(zones);
    }

    pub fn set_records(&self, zone_id: &str, records: Result<Vec<DnsRecord>, ProviderError>) {
        self.state
            .lock()
            .unwrap()
            .records
            .insert(zone_id.to_string(), records);
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    pub fn requested_zone_ids(&self) -> Vec<String> {
        self.state.lock().unwrap().requested_zone_ids.clone()
    }
}

#[async_trait]
impl DnsProvider for MockProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_zones(&self) -> Result<Vec<Zone>, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        state.zones.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn list_records(&self, zone: &Zone) -> Result<Vec<DnsRecord>, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        state.requested_zone_ids.push(zone.id.clone());
        state
            .records
            .get(&zone.id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

// ===== MockProviderFactory =====

pub struct MockProviderFactory {
    provider: MockProvider,
    tokens: Mutex<Vec<String>>,
}

impl MockProviderFactory {
    pub fn new(provider: MockProvider) -> Self {
        Self {
            provider,
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn create_count(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

impl ProviderFactory for MockProviderFactory {
    fn create(&self, api_token: String) -> CoreResult<Arc<dyn DnsProvider>> {
        self.tokens.lock().unwrap().push(api_token);
        Ok(Arc::new(self.provider.clone()))
    }
}

// ===== MemorySink =====

/// 内存报表，按创建顺序保存 sheet（表头为第一行）。
pub struct MemorySink {
    sheets: Vec<(String, Vec<Vec<String>>)>,
    saved: bool,
    save_error: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            sheets: Vec::new(),
            saved: false,
            save_error: None,
        }
    }

    pub fn failing_on_save(message: &str) -> Self {
        Self {
            save_error: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.sheets.iter().map(|(title, _)| title.as_str()).collect()
    }

    pub fn rows(&self, title: &str) -> Vec<Vec<&str>> {
        self.sheets
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, rows)| {
                rows.iter()
                    .map(|row| row.iter().map(String::as_str).collect())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }
}

fn owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| (*f).to_string()).collect()
}

impl ReportSink for MemorySink {
    fn add_sheet(&mut self, title: &str, header: &[&str]) -> CoreResult<SheetId> {
        self.sheets.push((title.to_string(), vec![owned(header)]));
        Ok(SheetId(self.sheets.len() - 1))
    }

    fn write_row(&mut self, sheet: SheetId, fields: &[&str]) -> CoreResult<()> {
        let (_, rows) = self
            .sheets
            .get_mut(sheet.0)
            .ok_or_else(|| CoreError::Report(format!("unknown sheet {}", sheet.0)))?;
        rows.push(owned(fields));
        Ok(())
    }

    fn save(&mut self) -> CoreResult<Option<PathBuf>> {
        if let Some(msg) = &self.save_error {
            return Err(CoreError::Report(msg.clone()));
        }
        self.saved = true;
        Ok(Some(PathBuf::from("memory://report")))
    }
}

// ===== RecordingReporter =====

pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn on_start(&self, label: &str) {
        self.events.lock().unwrap().push(format!("start:{label}"));
    }

    fn on_success(&self) {
        self.events.lock().unwrap().push("success".to_string());
    }

    fn on_error(&self, message: &str) {
        self.events.lock().unwrap().push(format!("error:{message}"));
    }
}

// ===== 工厂方法 =====

/// 创建注入 mock provider 的服务上下文；`token` 为 `None` 时模拟缺失凭证
pub fn create_test_context(
    token: Option<&str>,
    provider: MockProvider,
) -> (Arc<ServiceContext>, Arc<MockProviderFactory>) {
    let credentials = match token {
        Some(t) => StaticCredentialProvider::new(t),
        None => StaticCredentialProvider::missing(),
    };
    let factory = Arc::new(MockProviderFactory::new(provider));
    let ctx = Arc::new(ServiceContext::new(Arc::new(credentials), factory.clone()));
    (ctx, factory)
}

pub fn zone(id: &str, name: &str) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        status: "active".to_string(),
    }
}

pub fn record(id: &str, record_type: &str, name: &str, content: &str) -> DnsRecord {
    DnsRecord {
        id: id.to_string(),
        record_type: record_type.to_string(),
        name: name.to_string(),
        content: content.to_string(),
    }
}
