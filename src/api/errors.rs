use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Ставка больше баланса — раунд не сыгран.
    InsufficientBalance { stake: Chips, balance: Chips },

    /// Количество колод вне допустимого диапазона — шуз не заменён.
    InvalidDeckCount(u8),

    /// Ни одной ставки.
    EmptyBetSet,

    /// Внутренняя ошибка сервера.
    Internal(String),
}

impl ApiError {
    /// Машиночитаемый код для фронта.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::InsufficientBalance { .. } => "insufficient_balance",
            ApiError::InvalidDeckCount(_) => "invalid_deck_count",
            ApiError::EmptyBetSet => "empty_bet_set",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InsufficientBalance { stake, balance } => {
                ApiError::InsufficientBalance { stake, balance }
            }
            EngineError::InvalidDeckCount(d) => ApiError::InvalidDeckCount(d),
            EngineError::EmptyBetSet => ApiError::EmptyBetSet,
            EngineError::InvalidConfig(_) => ApiError::Internal(err.to_string()),
        }
    }
}
