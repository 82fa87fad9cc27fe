use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Кто выиграл раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Player,
    Banker,
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Winner::Player => "player",
            Winner::Banker => "banker",
            Winner::Tie => "tie",
        };
        write!(f, "{s}")
    }
}

/// Очки руки: сумма очков карт по модулю 10.
pub fn score(cards: &[Card]) -> u8 {
    let sum: u32 = cards.iter().map(|c| c.value() as u32).sum();
    (sum % 10) as u8
}

/// Итог одной стороны (Player или Banker).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResult {
    /// 2 или 3 карты в порядке сдачи.
    pub cards: Vec<Card>,
    /// Финальные очки (0..=9).
    pub score: u8,
    /// Первые две карты одного ранга.
    pub is_pair: bool,
    /// Натурал: 8 или 9 на первых двух картах.
    pub is_natural: bool,
}

impl HandResult {
    /// Собрать итог руки по картам.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let (is_pair, is_natural) = match cards.as_slice() {
            [a, b, ..] => (a.rank == b.rank, score(&[*a, *b]) >= 8),
            _ => (false, false),
        };
        Self {
            score: score(&cards),
            cards,
            is_pair,
            is_natural,
        }
    }

    /// Брала ли рука третью карту.
    pub fn drew_third(&self) -> bool {
        self.cards.len() > 2
    }

    /// Третья карта, если была.
    pub fn third_card(&self) -> Option<Card> {
        self.cards.get(2).copied()
    }
}

/// Результат раунда. Создаётся один раз на раздачу и больше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub player: HandResult,
    pub banker: HandResult,
    pub winner: Winner,
    /// Человекочитаемая метка исхода.
    pub outcome: String,
}

impl RoundResult {
    pub fn new(player: HandResult, banker: HandResult) -> Self {
        let winner = match player.score.cmp(&banker.score) {
            core::cmp::Ordering::Greater => Winner::Player,
            core::cmp::Ordering::Less => Winner::Banker,
            core::cmp::Ordering::Equal => Winner::Tie,
        };
        let natural = player.is_natural || banker.is_natural;
        Self {
            outcome: outcome_label(winner, natural).to_string(),
            player,
            banker,
            winner,
        }
    }

    /// Раунд закончился на натурале (у любой стороны).
    pub fn is_natural(&self) -> bool {
        self.player.is_natural || self.banker.is_natural
    }

    /// Пара хотя бы у одной стороны.
    pub fn has_pair(&self) -> bool {
        self.player.is_pair || self.banker.is_pair
    }
}

/// Метка исхода: (натурал или добор) × (игрок, банкир, ничья), всего 6.
pub fn outcome_label(winner: Winner, natural: bool) -> &'static str {
    match (natural, winner) {
        (true, Winner::Player) => "Player wins (natural)",
        (true, Winner::Banker) => "Banker wins (natural)",
        (true, Winner::Tie) => "Tie (natural)",
        (false, Winner::Player) => "Player wins",
        (false, Winner::Banker) => "Banker wins",
        (false, Winner::Tie) => "Tie",
    }
}
