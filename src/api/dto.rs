use serde::{Deserialize, Serialize};

use crate::domain::bets::BetMap;
use crate::domain::card::Suit;
use crate::domain::chips::Chips;
use crate::domain::hand::Winner;
use crate::domain::roadmap::Roadmaps;
use crate::domain::{RoundId, ShoeId};

/// DTO карты: так же, как её видит фронт (`{"suit":"hearts","rank":"10","value":0}`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub suit: Suit,
    pub rank: String,
    pub value: u8,
}

/// DTO руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandDto {
    pub cards: Vec<CardDto>,
    pub score: u8,
    pub is_pair: bool,
    pub is_natural: bool,
}

/// DTO сыгранного раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundDto {
    pub player: HandDto,
    pub banker: HandDto,
    pub winner: Winner,
    pub outcome: String,
}

/// Игрок (у стола он один).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDto {
    pub balance: Chips,
}

/// Текущий шуз.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoeDto {
    pub shoe_id: ShoeId,
    pub decks: u8,
    pub remaining_cards: usize,
    pub dealt_cards: usize,
    pub shuffles: u32,
}

/// Фаза раунда для фронта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Принимаем ставки.
    Betting,
    /// Раунд сыгран, выплаты посчитаны.
    Payout,
}

/// Текущий раунд: ставки и, после раздачи, результат.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentRoundDto {
    pub status: RoundPhase,
    pub bets: BetMap,
    pub round_id: Option<RoundId>,
    pub result: Option<RoundDto>,
    pub winnings: Option<Chips>,
    pub balance_delta: Option<i64>,
}

impl CurrentRoundDto {
    /// Пустой раунд, ждём ставок.
    pub fn betting() -> Self {
        Self {
            status: RoundPhase::Betting,
            bets: BetMap::new(),
            round_id: None,
            result: None,
            winnings: None,
            balance_delta: None,
        }
    }
}

/// Полное состояние стола для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateDto {
    pub user: UserDto,
    pub shoe: ShoeDto,
    pub current_round: CurrentRoundDto,
    pub roadmaps: Roadmaps,
    /// Последние несколько раундов, старые первыми.
    pub history: Vec<RoundDto>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Обновлённое состояние стола (после раздачи или нового шуза).
    State(GameStateDto),

    /// Баланс после reset-balance.
    Balance(Chips),
}
