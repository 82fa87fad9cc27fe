//! Доменная модель баккара: карты, шуз, руки, ставки, дорожки, конфиг стола.

pub mod bets;
pub mod card;
pub mod chips;
pub mod config;
pub mod hand;
pub mod roadmap;
pub mod shoe;

// Базовые идентификаторы.
pub type ShoeId = u64;
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use bets::*;
pub use card::*;
pub use chips::*;
pub use config::*;
pub use hand::*;
pub use roadmap::*;
pub use shoe::*;
