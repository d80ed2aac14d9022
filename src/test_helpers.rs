//! Shared fixtures for unit tests: a scripted transport, a recording
//! navigator, and snapshot builders.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::net::error::ApiError;
use crate::net::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::net::types::{CloudStats, DashboardSnapshot, IpAllocation, IpConflict, IpPool};
use crate::services::navigator::Navigator;

pub const TEST_BASE_URL: &str = "http://api.test";
pub const TEST_ORIGIN: &str = "http://dash.test";

type Reply = Result<ApiResponse, ApiError>;

enum Scripted {
    Ready(Reply),
    Gated(oneshot::Receiver<Reply>),
}

#[derive(Default)]
struct MockInner {
    routes: RefCell<HashMap<(Method, String), VecDeque<Scripted>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

/// Transport answering from per-route FIFO scripts and recording every request.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<MockInner>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: Method, path: &str, scripted: Scripted) {
        self.inner
            .routes
            .borrow_mut()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(scripted);
    }

    /// Queue a JSON response for the next request to `path`.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        let reply = Ok(ApiResponse { status, body: body.to_string() });
        self.push(method, path, Scripted::Ready(reply));
    }

    /// Queue a connectivity failure for the next request to `path`.
    pub fn fail(&self, method: Method, path: &str) {
        self.push(method, path, Scripted::Ready(Err(ApiError::Network("connection refused".to_owned()))));
    }

    /// Queue a response that stays pending until the returned sender fires.
    pub fn gate(&self, method: Method, path: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(method, path, Scripted::Gated(rx));
        tx
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.requests.borrow().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<ApiRequest> {
        let url = format!("{TEST_BASE_URL}{path}");
        self.requests().into_iter().filter(|r| r.url == url).collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let path = request.url.strip_prefix(TEST_BASE_URL).unwrap_or(&request.url).to_owned();
        let key = (request.method, path);
        self.inner.requests.borrow_mut().push(request);
        let next = self.inner.routes.borrow_mut().get_mut(&key).and_then(VecDeque::pop_front);
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("gate dropped".to_owned()))),
            None => Err(ApiError::Network(format!("no scripted response for {:?} {}", key.0, key.1))),
        }
    }
}

#[derive(Default)]
struct NavigatorInner {
    url: RefCell<String>,
    replaced: RefCell<Vec<String>>,
    redirects: RefCell<Vec<String>>,
}

/// Navigator that tracks the visible URL in memory.
#[derive(Clone, Default)]
pub struct MemoryNavigator {
    inner: Rc<NavigatorInner>,
}

impl MemoryNavigator {
    pub fn at(url: &str) -> Self {
        let nav = Self::default();
        *nav.inner.url.borrow_mut() = url.to_owned();
        nav
    }

    pub fn replaced(&self) -> Vec<String> {
        self.inner.replaced.borrow().clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.inner.redirects.borrow().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_url(&self) -> String {
        self.inner.url.borrow().clone()
    }

    fn origin(&self) -> String {
        TEST_ORIGIN.to_owned()
    }

    fn replace_url(&self, url: &str) {
        *self.inner.url.borrow_mut() = url.to_owned();
        self.inner.replaced.borrow_mut().push(url.to_owned());
    }

    fn redirect(&self, url: &str) {
        self.inner.redirects.borrow_mut().push(url.to_owned());
    }
}

pub fn allocation(ip: &str, org: &str, cloud: &str, pool: &str, kind: &str, entity: Option<&str>) -> IpAllocation {
    IpAllocation {
        ip_address: ip.to_owned(),
        org_name: org.to_owned(),
        allocation_type: kind.to_owned(),
        cloud_name: cloud.to_owned(),
        pool_name: pool.to_owned(),
        entity_name: entity.map(str::to_owned),
        ..IpAllocation::default()
    }
}

pub fn pool(cloud: &str, name: &str, total: u64, used: u64, free_addresses: &[&str]) -> IpPool {
    #[allow(clippy::cast_precision_loss)]
    let usage = if total == 0 { 0.0 } else { used as f64 / total as f64 * 100.0 };
    IpPool {
        name: name.to_owned(),
        network: format!("{name}/24"),
        cloud_name: cloud.to_owned(),
        total_ips: total,
        used_ips: used,
        free_ips: total - used,
        usage_percentage: Some(usage),
        used_addresses: Vec::new(),
        free_addresses: free_addresses.iter().map(|s| (*s).to_owned()).collect(),
    }
}

pub fn cloud(name: &str, pools: Vec<IpPool>) -> CloudStats {
    let total: u64 = pools.iter().map(|p| p.total_ips).sum();
    let used: u64 = pools.iter().map(|p| p.used_ips).sum();
    #[allow(clippy::cast_precision_loss)]
    let usage = if total == 0 { 0.0 } else { used as f64 / total as f64 * 100.0 };
    CloudStats {
        cloud_name: name.to_owned(),
        total_pools: pools.len() as u64,
        total_ips: total,
        used_ips: used,
        free_ips: total - used,
        usage_percentage: Some(usage),
        pools,
    }
}

pub fn conflict(ip: &str) -> IpConflict {
    IpConflict {
        ip_address: Some(ip.to_owned()),
        clouds: vec!["vcd".to_owned(), "vcd01".to_owned()],
        pools: vec!["public-1".to_owned(), "public-2".to_owned()],
        organizations: vec!["Acme".to_owned(), "Globex".to_owned()],
        conflict_type: Some("DUPLICATE_ALLOCATION".to_owned()),
    }
}

/// Two clouds, three pools, four allocations, no conflicts.
pub fn sample_snapshot() -> DashboardSnapshot {
    let clouds = vec![
        cloud(
            "vcd",
            vec![
                pool("vcd", "87.255.215.0", 10, 9, &["87.255.215.9"]),
                pool("vcd", "87.255.216.0", 10, 2, &[]),
            ],
        ),
        cloud("vcd01", vec![pool("vcd01", "176.98.235.0", 4, 4, &[])]),
    ];
    let total: u64 = clouds.iter().map(|c| c.total_ips).sum();
    let used: u64 = clouds.iter().map(|c| c.used_ips).sum();
    #[allow(clippy::cast_precision_loss)]
    let usage = used as f64 / total as f64 * 100.0;
    DashboardSnapshot {
        total_clouds: clouds.len() as u64,
        total_ips: total,
        used_ips: used,
        free_ips: total - used,
        usage_percentage: usage,
        last_update: Some("2025-01-15T10:30:00Z".to_owned()),
        clouds,
        all_allocations: vec![
            allocation("87.255.215.20", "Acme", "vcd", "87.255.215.0", "EDGE", Some("edge-01")),
            allocation("87.255.215.3", "globex", "vcd", "87.255.215.0", "NAT", None),
            allocation("176.98.235.42", "Initech", "vcd01", "176.98.235.0", "VM_ALLOCATED", Some("web-vm")),
            allocation("87.255.216.7", "acme", "vcd", "87.255.216.0", "FLOATING_IP", None),
        ],
        conflicts: std::collections::BTreeMap::new(),
    }
}

pub fn snapshot_json(snapshot: &DashboardSnapshot) -> serde_json::Value {
    serde_json::to_value(snapshot).unwrap()
}
