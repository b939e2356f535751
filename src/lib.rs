//! # Receipt Processor
//!
//! Stores submitted purchase receipts under generated ids and awards each one
//! a deterministic number of reward points.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Money is held at 2 decimal places via `rust_decimal`
//! - **Independent rules**: Every point rule sees the whole receipt; none affects another
//! - **Unique ids**: Id generation and insertion happen under one lock, with bounded retries
//! - **Validated input**: Only schema-valid receipts reach the store
//!
//! ## Example
//!
//! ```
//! use receipt_processor::ReceiptProcessor;
//!
//! let json = r#"{
//!     "retailer": "Target",
//!     "purchaseDate": "2022-01-02",
//!     "purchaseTime": "13:13",
//!     "total": "1.25",
//!     "items": [{"shortDescription": "Pepsi - 12-oz", "price": "1.25"}]
//! }"#;
//!
//! let processor = ReceiptProcessor::new();
//! let id = processor.submit_json(json.as_bytes()).unwrap();
//! assert_eq!(processor.points(id.as_str()).unwrap(), 31);
//! ```

pub mod decimal;
pub mod engine;
pub mod error;
pub mod receipt;
pub mod scoring;
#[cfg(feature = "server")]
pub mod server;
pub mod store;

pub use decimal::{Money, MoneyError};
pub use engine::ReceiptProcessor;
pub use error::{ProcessorError, Result};
pub use receipt::{Item, ItemRecord, Receipt, ReceiptRecord};
pub use scoring::{score, score_with, RetailerRule, ScoreBreakdown};
pub use store::{IdGenerator, ReceiptId, ReceiptStore, UuidGenerator, MAX_ID_ATTEMPTS};
