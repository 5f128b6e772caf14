use super::Node;
use crate::wire::Hash;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory live ticket pool.
#[derive(Clone, Default)]
pub struct LiveTicketSet {
    live: Arc<RwLock<HashSet<Hash>>>,
}

impl LiveTicketSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, ticket_hash: Hash) {
        let mut live = self.live.write().await;
        live.insert(ticket_hash);
    }

    /// Removes a ticket from the pool, as happens when it votes, is missed
    /// or expires.
    pub async fn remove(&self, ticket_hash: &Hash) -> bool {
        let mut live = self.live.write().await;
        live.remove(ticket_hash)
    }

    pub async fn len(&self) -> usize {
        self.live.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.live.read().await.is_empty()
    }
}

impl FromIterator<Hash> for LiveTicketSet {
    fn from_iter<I: IntoIterator<Item = Hash>>(iter: I) -> Self {
        Self {
            live: Arc::new(RwLock::new(iter.into_iter().collect())),
        }
    }
}

#[async_trait]
impl Node for LiveTicketSet {
    async fn exists_live_ticket(&self, ticket_hash: &Hash) -> anyhow::Result<bool> {
        let live = self.live.read().await;
        Ok(live.contains(ticket_hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_membership_follows_inserts_and_removals() {
        let set = LiveTicketSet::from_iter([Hash::new([1; 32])]);
        set.insert(Hash::new([2; 32])).await;
        assert_eq!(set.len().await, 2);

        assert!(set.exists_live_ticket(&Hash::new([2; 32])).await.unwrap());
        assert!(set.remove(&Hash::new([1; 32])).await);
        assert!(!set.exists_live_ticket(&Hash::new([1; 32])).await.unwrap());
    }
}
