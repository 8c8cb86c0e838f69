//! In-memory receipt storage and loyalty points computation.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

use models::Receipt;

/// Process-wide receipt store.
///
/// Cloning is cheap and every clone shares the same map. All access goes
/// through the lock; entries are never updated or removed once inserted.
#[derive(Debug, Clone, Default)]
pub struct Database {
    receipts: Arc<RwLock<HashMap<Uuid, Arc<Receipt>>>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn receipts(&self) -> &RwLock<HashMap<Uuid, Arc<Receipt>>> {
        &self.receipts
    }
}
