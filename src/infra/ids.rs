use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::ShoeId;

/// Генерация ID шузов на монотонном счётчике.
///
/// Номер раунда внутри шуза считается по длине истории,
/// поэтому здесь только шузы.
#[derive(Debug)]
pub struct IdGenerator {
    shoe_counter: AtomicU64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Первый выданный ID = 1.
    pub fn new() -> Self {
        Self {
            shoe_counter: AtomicU64::new(1),
        }
    }

    /// Продолжить нумерацию после уже выданного ID (восстановление из снапшота).
    pub fn starting_after(last: ShoeId) -> Self {
        Self {
            shoe_counter: AtomicU64::new(last.saturating_add(1)),
        }
    }

    #[inline]
    pub fn next_shoe_id(&self) -> ShoeId {
        self.shoe_counter.fetch_add(1, Ordering::Relaxed)
    }
}
