use linera_sdk::views::{
    linera_views, MapView, RegisterView, RootView, ViewError, ViewStorageContext,
};
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::config::TableConfig;
use crate::domain::shoe::Shoe;
use crate::domain::ShoeId;
use crate::engine::{BaccaratTable, EngineError, RandomSource};
use crate::infra::persistence::{
    BalanceStore, ClosedShoe, HistoryStore, InMemoryBalanceStore, InMemoryHistoryStore,
    RoundRecord,
};
use crate::infra::rng::HashChainRng;
use crate::infra::rng_seed::RngSeed;

/// Снэпшот шуза: карты и счётчики, без RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoeSnapshot {
    pub decks: u8,
    /// Оставшиеся карты, верх шуза — последний элемент.
    pub cards: Vec<Card>,
    pub dealt: usize,
    pub shuffles: u32,
}

impl ShoeSnapshot {
    pub fn from_shoe<R: RandomSource>(shoe: &Shoe<R>) -> Self {
        Self {
            decks: shoe.decks(),
            cards: shoe.cards().to_vec(),
            dealt: shoe.dealt(),
            shuffles: shoe.shuffles(),
        }
    }

    /// Развернуть обратно, подставив RNG для будущих перемешиваний.
    pub fn into_shoe<R: RandomSource>(self, rng: R) -> Shoe<R> {
        Shoe::from_parts(self.decks, self.cards, self.dealt, self.shuffles, rng)
    }
}

/// Стол, развёрнутый из снапшота в память.
pub type RestoredTable<R> = BaccaratTable<R, InMemoryHistoryStore, InMemoryBalanceStore>;

/// Снэпшот стола, который можно хранить во View.
///
/// Состояние RNG сюда не входит. Будущие перемешивания зависят от RNG,
/// переданного в `into_table`; `into_seeded_table` выводит его из
/// базового seed, `shoe_id` и числа уже сделанных перемешиваний.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSnapshot {
    pub config: TableConfig,
    pub shoe_id: ShoeId,
    pub shoe: ShoeSnapshot,
    pub balance: Chips,
    pub history: Vec<RoundRecord>,
    #[serde(default)]
    pub closed_shoes: Vec<ClosedShoe>,
    #[serde(default)]
    pub rounds_played: u64,
}

impl TableSnapshot {
    /// Упаковать живой стол в снапшот.
    pub fn from_table<R, H, B>(table: &BaccaratTable<R, H, B>) -> Self
    where
        R: RandomSource,
        H: HistoryStore,
        B: BalanceStore,
    {
        Self {
            config: table.config().clone(),
            shoe_id: table.shoe_id(),
            shoe: ShoeSnapshot::from_shoe(table.shoe()),
            balance: table.balance(),
            history: table.history().all(),
            closed_shoes: table.closed_shoes().to_vec(),
            rounds_played: table.rounds_played(),
        }
    }

    /// Развернуть снапшот обратно в стол (в памяти).
    pub fn into_table<R: RandomSource>(self, rng: R) -> Result<RestoredTable<R>, EngineError> {
        let table = BaccaratTable::from_parts(
            self.config,
            self.shoe.into_shoe(rng),
            self.shoe_id,
            InMemoryHistoryStore::from_records(self.history),
            InMemoryBalanceStore::new(self.balance),
        )?;
        Ok(table.with_archive(self.closed_shoes, self.rounds_played))
    }

    /// То же, но RNG выводится из `base`: `derive(shoe_id, shuffles)`.
    /// Два восстановления одного снапшота с одним seed перемешивают одинаково.
    pub fn into_seeded_table(
        self,
        base: &RngSeed,
    ) -> Result<RestoredTable<HashChainRng>, EngineError> {
        let rng = base.derive(self.shoe_id, self.shoe.shuffles).to_hash_rng();
        self.into_table(rng)
    }
}

/// Глобальное состояние приложения баккара на Linera.
///
/// Важное:
/// - НЕ вкладываем RegisterView внутрь MapView.
/// - Стол храним целиком как TableSnapshot.
#[derive(RootView)]
#[view(context = ViewStorageContext)]
pub struct BaccaratState {
    /// Текущий стол (None, пока стол не открыт).
    #[view(register)]
    pub table: RegisterView<Option<TableSnapshot>>,

    /// История закрытых шузов.
    ///
    /// Ключ: ShoeId,
    /// Значение: все раунды этого шуза по порядку.
    #[view(map)]
    pub finished_shoes: MapView<ShoeId, Vec<RoundRecord>>,

    /// Сколько всего раундов сыграно (для статистики / мониторинга).
    #[view(register)]
    pub total_rounds_played: RegisterView<u64>,
}

impl BaccaratState {
    /// Записать стол после операции: закрытые шузы уходят в `finished_shoes`,
    /// сам стол сохраняется снапшотом уже без них.
    pub fn store_table<R, H, B>(
        &mut self,
        table: &mut BaccaratTable<R, H, B>,
    ) -> Result<(), ViewError>
    where
        R: RandomSource,
        H: HistoryStore,
        B: BalanceStore,
    {
        for closed in table.take_closed_shoes() {
            self.finished_shoes.insert(&closed.shoe_id, closed.rounds)?;
        }
        self.total_rounds_played.set(table.rounds_played());
        self.table.set(Some(TableSnapshot::from_table(table)));
        Ok(())
    }
}
