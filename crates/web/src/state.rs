use storage::Database;

use crate::config::Config;

/// What the points query answers for an id that was never submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownReceiptPolicy {
    /// Report zero points
    #[default]
    ZeroPoints,
    /// Report 404 Not Found
    NotFound,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub db: Database,
    pub unknown_receipt: UnknownReceiptPolicy,
}

impl AppState {
    pub fn new(db: Database, unknown_receipt: UnknownReceiptPolicy) -> Self {
        Self {
            db,
            unknown_receipt,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let unknown_receipt = if config.strict_receipt_lookup {
            UnknownReceiptPolicy::NotFound
        } else {
            UnknownReceiptPolicy::ZeroPoints
        };

        Self::new(Database::new(), unknown_receipt)
    }
}
