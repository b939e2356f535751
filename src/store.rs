//! In-memory receipt store keyed by generated identifiers.

use crate::error::{ProcessorError, Result};
use crate::receipt::Receipt;
use log::{debug, error};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

/// How many candidate ids `store` draws before giving up.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Opaque identifier assigned to a receipt when it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn new(id: impl Into<String>) -> Self {
        ReceiptId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ReceiptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of candidate receipt ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> ReceiptId;
}

/// Random UUID v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> ReceiptId {
        ReceiptId(Uuid::new_v4().to_string())
    }
}

/// Thread-safe map of stored receipts.
///
/// # Invariants
///
/// - No two receipts share an id; candidate generation and insertion happen
///   under the same write lock
/// - Stored receipts are never updated or removed
pub struct ReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
    ids: Box<dyn IdGenerator>,
}

impl ReceiptStore {
    /// Creates an empty store issuing UUID v4 ids.
    pub fn new() -> Self {
        Self::with_generator(UuidGenerator)
    }

    /// Creates an empty store drawing ids from `ids`.
    pub fn with_generator(ids: impl IdGenerator + 'static) -> Self {
        ReceiptStore {
            receipts: RwLock::new(HashMap::new()),
            ids: Box::new(ids),
        }
    }

    /// Stores `receipt` under a fresh id and returns that id.
    ///
    /// Colliding candidates are discarded and redrawn, up to
    /// [`MAX_ID_ATTEMPTS`] times.
    pub fn store(&self, receipt: Receipt) -> Result<ReceiptId> {
        let mut receipts = self
            .receipts
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.ids.generate();
            if receipts.contains_key(&id) {
                debug!("Receipt id {} already taken (attempt {})", id, attempt);
                continue;
            }

            receipts.insert(id.clone(), receipt);
            return Ok(id);
        }

        error!(
            "Id generator produced {} colliding ids in a row",
            MAX_ID_ATTEMPTS
        );
        Err(ProcessorError::IdGenerationExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Returns a copy of the receipt stored under `id`.
    pub fn lookup(&self, id: &str) -> Result<Receipt> {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| ProcessorError::NotFound { id: id.to_string() })
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}
