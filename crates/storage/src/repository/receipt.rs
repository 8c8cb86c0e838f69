use std::{collections::hash_map::Entry, sync::Arc};

use uuid::Uuid;

use crate::Database;
use crate::models::Receipt;

pub struct ReceiptRepository<'a> {
    db: &'a Database,
}

impl<'a> ReceiptRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Stores a receipt under a freshly generated identifier and returns it.
    pub async fn save(&self, receipt: Receipt) -> Uuid {
        let mut receipts = self.db.receipts().write().await;

        loop {
            let id = Uuid::new_v4();
            if let Entry::Vacant(entry) = receipts.entry(id) {
                entry.insert(Arc::new(receipt));
                return id;
            }
        }
    }

    /// Looks up a receipt. An unknown id is an ordinary outcome, not an error.
    pub async fn find_by_id(&self, id: Uuid) -> Option<Arc<Receipt>> {
        self.db.receipts().read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.db.receipts().read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
