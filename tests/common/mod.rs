#![allow(dead_code)]

use receipt_points::application::service::ReceiptService;
use receipt_points::domain::ports::IdGenerator;
use receipt_points::domain::receipt::ReceiptId;
use receipt_points::infrastructure::id_generator::UuidGenerator;
use receipt_points::infrastructure::in_memory::InMemoryScoreStore;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out `receipt-1`, `receipt-2`, ... so tests can predict ids.
#[derive(Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> ReceiptId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        ReceiptId::new(format!("receipt-{n}"))
    }
}

pub fn uuid_service() -> Arc<ReceiptService> {
    Arc::new(ReceiptService::new(
        Box::new(InMemoryScoreStore::new()),
        Box::new(UuidGenerator::new()),
    ))
}

pub fn sequential_service() -> Arc<ReceiptService> {
    Arc::new(ReceiptService::new(
        Box::new(InMemoryScoreStore::new()),
        Box::new(SequentialIdGenerator::default()),
    ))
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}
