use storage::{
    Database,
    dto::receipt::ProcessReceiptRequest,
    error::{Result, StorageError},
    models::Receipt,
    repository::receipt::ReceiptRepository,
    services::points,
};
use uuid::Uuid;

/// Parse and store a submitted receipt
pub async fn process_receipt(db: &Database, request: &ProcessReceiptRequest) -> Result<Uuid> {
    let receipt = Receipt::try_from(request)?;

    let repo = ReceiptRepository::new(db);
    let id = repo.save(receipt).await;
    tracing::info!(receipt_id = %id, "Receipt processed");

    Ok(id)
}

/// Score a stored receipt
pub async fn get_points(db: &Database, id: Uuid) -> Result<u64> {
    let repo = ReceiptRepository::new(db);
    let receipt = repo.find_by_id(id).await.ok_or(StorageError::NotFound)?;

    points::calculate_points(&receipt)
}
