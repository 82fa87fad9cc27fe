use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::hand::RoundResult;
use crate::domain::{RoundId, ShoeId};

/// Текущая версия формата сохранённого раунда.
pub const RECORD_VERSION: u8 = 1;

/// Сохранённый раунд. Схема фиксирована и помечена версией.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRecord {
    pub version: u8,
    pub shoe_id: ShoeId,
    /// Номер раунда внутри шуза, с 1.
    pub round_id: RoundId,
    pub result: RoundResult,
}

impl RoundRecord {
    pub fn new(shoe_id: ShoeId, round_id: RoundId, result: RoundResult) -> Self {
        Self {
            version: RECORD_VERSION,
            shoe_id,
            round_id,
            result,
        }
    }
}

/// Закрытый шуз: его раунды по порядку. Появляется при смене шуза.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClosedShoe {
    pub shoe_id: ShoeId,
    pub rounds: Vec<RoundRecord>,
}

/// Ошибки импорта истории.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Битый JSON истории: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Неизвестная версия записи раунда: {0}")]
    UnsupportedVersion(u8),
}

/// Выгрузить историю в JSON.
pub fn records_to_json(records: &[RoundRecord]) -> Result<String, RecordError> {
    Ok(serde_json::to_string(records)?)
}

/// Загрузить историю из JSON, отбрасывая всё целиком при неизвестной версии.
pub fn records_from_json(json: &str) -> Result<Vec<RoundRecord>, RecordError> {
    let records: Vec<RoundRecord> = serde_json::from_str(json)?;
    if let Some(bad) = records.iter().find(|r| r.version != RECORD_VERSION) {
        return Err(RecordError::UnsupportedVersion(bad.version));
    }
    Ok(records)
}

/// Хранилище истории раундов текущего шуза.
///
/// Порядок вставки = хронологический порядок; записи не меняются.
pub trait HistoryStore {
    /// Дописать раунд в конец.
    fn append(&mut self, record: RoundRecord);

    /// Все раунды по порядку.
    fn all(&self) -> Vec<RoundRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Начать новую историю (новый шуз).
    fn clear(&mut self);

    /// Только результаты — то, что нужно движку дорожек.
    fn results(&self) -> Vec<RoundResult> {
        self.all().into_iter().map(|r| r.result).collect()
    }
}

/// Хранилище баланса игрока.
pub trait BalanceStore {
    fn get(&self) -> Chips;

    fn set(&mut self, balance: Chips);
}

/// Простая in-memory история для тестов и локального запуска.
#[derive(Clone, Debug, Default)]
pub struct InMemoryHistoryStore {
    records: Vec<RoundRecord>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Поднять историю из уже сохранённых записей.
    pub fn from_records(records: Vec<RoundRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn append(&mut self, record: RoundRecord) {
        self.records.push(record);
    }

    fn all(&self) -> Vec<RoundRecord> {
        self.records.clone()
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn clear(&mut self) {
        self.records.clear();
    }

    fn results(&self) -> Vec<RoundResult> {
        self.records.iter().map(|r| r.result.clone()).collect()
    }
}

/// In-memory баланс.
#[derive(Clone, Copy, Debug, Default)]
pub struct InMemoryBalanceStore {
    balance: Chips,
}

impl InMemoryBalanceStore {
    pub fn new(balance: Chips) -> Self {
        Self { balance }
    }
}

impl BalanceStore for InMemoryBalanceStore {
    fn get(&self) -> Chips {
        self.balance
    }

    fn set(&mut self, balance: Chips) {
        self.balance = balance;
    }
}
