//! Движок баккара: правила добора, раунд, расчёт ставок, дорожки.
//!
//! Высокоуровневый объект: `BaccaratTable`
//! Основные операции:
//!   - `deal_round` – проверить ставки, сыграть раунд, рассчитать, записать историю
//!   - `reset_shoe` – новый шуз (6–8 колод)
//!   - `compute_roadmaps` – пересчитать дорожки из истории

pub mod errors;
pub mod payout;
pub mod resolver;
pub mod roads;
pub mod rules;
pub mod table;

pub use errors::EngineError;
pub use payout::{settle, validate_bets, Settlement};
pub use resolver::resolve_round;
pub use roads::{compute_roadmaps, BigRoad};
pub use table::{deal_round, reset_shoe, BaccaratTable, DealOutcome, MAX_DECKS, MIN_DECKS};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
