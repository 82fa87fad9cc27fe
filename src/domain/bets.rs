use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Тип ставки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BetType {
    Player,
    Banker,
    Tie,
    PlayerPair,
    BankerPair,
}

impl BetType {
    pub const ALL: [BetType; 5] = [
        BetType::Player,
        BetType::Banker,
        BetType::Tie,
        BetType::PlayerPair,
        BetType::BankerPair,
    ];
}

/// Ставки на раунд: тип → сумма. Отсутствующий ключ = ставки нет.
///
/// В JSON выглядит так же, как в API: `{"player": 100, "tie": 50}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct BetMap {
    stakes: BTreeMap<BetType, Chips>,
}

impl BetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-стиль: `BetMap::new().with(BetType::Player, Chips(100))`.
    pub fn with(mut self, bet: BetType, amount: Chips) -> Self {
        self.place(bet, amount);
        self
    }

    /// Добавить фишки к ставке (ставки одного типа суммируются).
    pub fn place(&mut self, bet: BetType, amount: Chips) {
        if amount.is_zero() {
            return;
        }
        *self.stakes.entry(bet).or_insert(Chips::ZERO) += amount;
    }

    /// Ставка на тип, 0 если её нет.
    pub fn stake(&self, bet: BetType) -> Chips {
        self.stakes.get(&bet).copied().unwrap_or(Chips::ZERO)
    }

    pub fn total(&self) -> Chips {
        self.stakes.values().copied().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total().is_zero()
    }

    pub fn clear(&mut self) {
        self.stakes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (BetType, Chips)> + '_ {
        self.stakes.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<(BetType, Chips)> for BetMap {
    fn from_iter<I: IntoIterator<Item = (BetType, Chips)>>(iter: I) -> Self {
        let mut map = BetMap::new();
        for (bet, amount) in iter {
            map.place(bet, amount);
        }
        map
    }
}
