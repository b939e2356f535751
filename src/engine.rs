//! Receipt processing engine.
//!
//! Wires the JSON parser, the receipt store and the point rules into the two
//! operations callers see: submit a receipt, and score a stored receipt.

use crate::error::{ProcessorError, Result};
use crate::receipt::Receipt;
use crate::scoring::{RetailerRule, ScoreBreakdown};
use crate::store::{IdGenerator, ReceiptId, ReceiptStore};
use log::{debug, info, warn};
use std::io::{Read, Write};

/// The receipt processing engine.
///
/// All methods take `&self`; the engine can be shared across threads or
/// request handlers behind an `Arc`.
pub struct ReceiptProcessor {
    store: ReceiptStore,
    retailer_rule: RetailerRule,
}

impl ReceiptProcessor {
    /// Creates an empty processor with UUID ids and the standard retailer rule.
    pub fn new() -> Self {
        Self::with_store(ReceiptStore::new())
    }

    /// Creates an empty processor drawing ids from `ids`.
    pub fn with_generator(ids: impl IdGenerator + 'static) -> Self {
        Self::with_store(ReceiptStore::with_generator(ids))
    }

    fn with_store(store: ReceiptStore) -> Self {
        ReceiptProcessor {
            store,
            retailer_rule: RetailerRule::default(),
        }
    }

    /// Selects how retailer name characters are counted.
    pub fn retailer_rule(mut self, rule: RetailerRule) -> Self {
        self.retailer_rule = rule;
        self
    }

    /// Stores an already validated receipt and returns its new id.
    pub fn submit(&self, receipt: Receipt) -> Result<ReceiptId> {
        let retailer = receipt.retailer.clone();
        let id = self.store.store(receipt)?;
        info!("Stored receipt {} from {:?}", id, retailer);
        Ok(id)
    }

    /// Parses a JSON receipt document and stores it.
    pub fn submit_json(&self, bytes: &[u8]) -> Result<ReceiptId> {
        let receipt = Receipt::from_json(bytes).map_err(|e| {
            debug!("Rejected receipt submission: {}", e);
            e
        })?;
        self.submit(receipt)
    }

    /// Reads a whole JSON receipt document from `reader` and stores it.
    pub fn submit_reader<R: Read>(&self, mut reader: R) -> Result<ReceiptId> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.submit_json(&bytes)
    }

    /// Returns a copy of the receipt stored under `id`.
    pub fn receipt(&self, id: &str) -> Result<Receipt> {
        self.store.lookup(id)
    }

    /// Returns the per-rule points for the receipt stored under `id`.
    pub fn breakdown(&self, id: &str) -> Result<ScoreBreakdown> {
        let receipt = self.store.lookup(id).map_err(|e| {
            if let ProcessorError::NotFound { .. } = e {
                warn!("Points requested for unknown receipt {}", id);
            }
            e
        })?;
        let breakdown = ScoreBreakdown::new(&receipt, self.retailer_rule);
        debug!("Receipt {} breakdown: {:?}", id, breakdown);
        Ok(breakdown)
    }

    /// Returns the total points for the receipt stored under `id`.
    pub fn points(&self, id: &str) -> Result<u64> {
        Ok(self.breakdown(id)?.total())
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Writes `id,retailer,points` rows for `ids` as CSV, in the given order.
    pub fn write_output<W: Write>(&self, ids: &[ReceiptId], writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "retailer", "points"])?;

        for id in ids {
            let receipt = self.store.lookup(id.as_str())?;
            let points = ScoreBreakdown::new(&receipt, self.retailer_rule).total();
            csv_writer.write_record([
                id.as_str(),
                receipt.retailer.as_str(),
                points.to_string().as_str(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for ReceiptProcessor {
    fn default() -> Self {
        Self::new()
    }
}
