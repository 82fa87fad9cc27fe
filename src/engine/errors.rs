use crate::domain::Chips;

use thiserror::Error;

/// Ошибки движка баккара.
///
/// Любая из них означает, что раунд не сыгран и состояние не менялось.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недостаточно фишек: ставка {stake}, баланс {balance}")]
    InsufficientBalance { stake: Chips, balance: Chips },

    #[error("Недопустимое количество колод: {0}")]
    InvalidDeckCount(u8),

    #[error("Не сделано ни одной ставки")]
    EmptyBetSet,

    #[error("Некорректный конфиг стола: {0}")]
    InvalidConfig(&'static str),
}
