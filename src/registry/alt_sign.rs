use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Alternate signing address registered for a ticket, together with the
/// request and response that registered it.
///
/// # Fields
/// - `alt_sign_addr`: Address permitted to sign for the ticket
/// - `req`, `req_sig`: Registration request body and its signature
/// - `resp`, `resp_sig`: VSP response body and the VSP's signature over it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AltSignAddrRecord {
    pub alt_sign_addr: String,
    #[serde(default)]
    pub req: String,
    #[serde(default)]
    pub req_sig: String,
    #[serde(default)]
    pub resp: String,
    #[serde(default)]
    pub resp_sig: String,
}

impl AltSignAddrRecord {
    pub fn new(alt_sign_addr: impl Into<String>) -> Self {
        Self {
            alt_sign_addr: alt_sign_addr.into(),
            req: String::new(),
            req_sig: String::new(),
            resp: String::new(),
            resp_sig: String::new(),
        }
    }
}

/// Record lookup capability.
#[async_trait]
pub trait AltSignAddrStore: Send + Sync {
    /// Fetches the record for a ticket. `Ok(None)` means no alternate
    /// address is registered; `Err` means the store itself failed.
    async fn alt_sign_addr_data(&self, ticket_hash: &str) -> anyhow::Result<Option<AltSignAddrRecord>>;
}

/// In-memory registry keyed by ticket hash string.
#[derive(Clone, Default)]
pub struct MemoryAltSignStore {
    records: Arc<RwLock<HashMap<String, AltSignAddrRecord>>>,
}

impl MemoryAltSignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces the record for a ticket.
    pub async fn insert(&self, ticket_hash: impl Into<String>, record: AltSignAddrRecord) {
        let mut records = self.records.write().await;
        records.insert(ticket_hash.into(), record);
    }

    pub async fn remove(&self, ticket_hash: &str) -> Option<AltSignAddrRecord> {
        let mut records = self.records.write().await;
        records.remove(ticket_hash)
    }
}

#[async_trait]
impl AltSignAddrStore for MemoryAltSignStore {
    async fn alt_sign_addr_data(&self, ticket_hash: &str) -> anyhow::Result<Option<AltSignAddrRecord>> {
        let records = self.records.read().await;
        Ok(records.get(ticket_hash).cloned())
    }
}
