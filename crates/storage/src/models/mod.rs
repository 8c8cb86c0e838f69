mod receipt;

pub use receipt::{Item, Receipt, parse_amount, parse_purchase_date, parse_purchase_time};
