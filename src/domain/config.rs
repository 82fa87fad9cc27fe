use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::roadmap::RoadLayout;
use crate::engine::{EngineError, MAX_DECKS, MIN_DECKS};

/// Конфиг стола: шуз, стартовый баланс, геометрия дорожек.
///
/// Всё с разумными значениями по умолчанию, поэтому в JSON можно
/// указывать только то, что отличается: `{"default_decks": 6}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Сколько колод в новом шузе, если при сбросе не указано.
    pub default_decks: u8,
    /// Минимум колод, разрешённый при сбросе шуза.
    pub min_decks: u8,
    /// Максимум колод, разрешённый при сбросе шуза.
    pub max_decks: u8,
    /// Баланс нового игрока и баланс после reset-balance.
    pub starting_balance: Chips,
    /// Сколько последних раундов отдавать в состоянии стола.
    pub history_window: usize,
    pub layout: RoadLayout,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_decks: 8,
            min_decks: 6,
            max_decks: 8,
            starting_balance: Chips(10_000),
            history_window: 10,
            layout: RoadLayout::default(),
        }
    }
}

impl TableConfig {
    pub fn deck_range(&self) -> RangeInclusive<u8> {
        self.min_decks..=self.max_decks
    }

    /// Проверка согласованности конфига.
    /// Диапазон колод должен лежать внутри `MIN_DECKS..=MAX_DECKS`.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.min_decks < MIN_DECKS
            || self.max_decks > MAX_DECKS
            || self.min_decks > self.max_decks
        {
            return Err(EngineError::InvalidConfig("min_decks/max_decks"));
        }
        if !self.deck_range().contains(&self.default_decks) {
            return Err(EngineError::InvalidConfig("default_decks"));
        }
        if self.layout.rows == 0 {
            return Err(EngineError::InvalidConfig("layout.rows"));
        }
        if self.layout.tail_row >= self.layout.rows {
            return Err(EngineError::InvalidConfig("layout.tail_row"));
        }
        Ok(())
    }

    /// Прочитать конфиг из JSON и сразу проверить.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let cfg: TableConfig = serde_json::from_str(json)
            .map_err(|_| EngineError::InvalidConfig("malformed json"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
