// src/engine/table.rs

use crate::domain::bets::BetMap;
use crate::domain::chips::Chips;
use crate::domain::config::TableConfig;
use crate::domain::hand::RoundResult;
use crate::domain::roadmap::{RoadLayout, Roadmaps};
use crate::domain::shoe::Shoe;
use crate::domain::{RoundId, ShoeId};
use crate::engine::errors::EngineError;
use crate::engine::payout::{settle, validate_bets, Settlement};
use crate::engine::resolver::resolve_round;
use crate::engine::roads::compute_roadmaps;
use crate::engine::RandomSource;
use crate::infra::ids::IdGenerator;
use crate::infra::persistence::{BalanceStore, ClosedShoe, HistoryStore, RoundRecord};

/// Допустимое количество колод при сбросе шуза.
pub const MIN_DECKS: u8 = 6;
pub const MAX_DECKS: u8 = 8;

/// Что получилось за одну раздачу.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DealOutcome {
    pub round_id: RoundId,
    pub result: RoundResult,
    pub settlement: Settlement,
    pub balance_delta: i64,
    /// Баланс после раунда.
    pub balance: Chips,
    pub roadmaps: Roadmaps,
}

/// Одна раздача целиком: проверка ставок → карты → расчёт → история → баланс → дорожки.
///
/// Если ставки не прошли проверку, шуз, история и баланс не трогаются.
pub fn deal_round<R, H, B>(
    bets: &BetMap,
    shoe: &mut Shoe<R>,
    history: &mut H,
    balance: &mut B,
    shoe_id: ShoeId,
    layout: &RoadLayout,
) -> Result<DealOutcome, EngineError>
where
    R: RandomSource,
    H: HistoryStore,
    B: BalanceStore,
{
    let current = balance.get();
    if let Err(err) = validate_bets(bets, current) {
        tracing::warn!(stake = %bets.total(), balance = %current, error = %err, "deal rejected");
        return Err(err);
    }

    let result = resolve_round(shoe);
    let settlement = settle(bets, &result);

    let round_id = history.len() as RoundId + 1;
    history.append(RoundRecord::new(shoe_id, round_id, result.clone()));

    let new_balance = current.apply_delta(settlement.balance_delta);
    balance.set(new_balance);

    tracing::info!(
        shoe_id,
        round_id,
        winner = %result.winner,
        stake = %settlement.total_stake,
        winnings = %settlement.winnings,
        delta = settlement.balance_delta,
        balance = %new_balance,
        remaining = shoe.remaining(),
        "round settled"
    );

    let roadmaps = compute_roadmaps(&history.results(), layout);

    Ok(DealOutcome {
        round_id,
        result,
        settlement,
        balance_delta: settlement.balance_delta,
        balance: new_balance,
        roadmaps,
    })
}

/// Проверка количества колод.
pub fn validate_deck_count(decks: u8, min: u8, max: u8) -> Result<(), EngineError> {
    if (min..=max).contains(&decks) {
        Ok(())
    } else {
        Err(EngineError::InvalidDeckCount(decks))
    }
}

/// Новый шуз на `decks` колод (6..=8).
pub fn reset_shoe<R: RandomSource>(decks: u8, rng: R) -> Result<Shoe<R>, EngineError> {
    validate_deck_count(decks, MIN_DECKS, MAX_DECKS)?;
    Ok(Shoe::new(decks, rng))
}

/// Стол: конфиг + шуз + история + баланс.
///
/// Каждая операция берёт `&mut self`: одновременно идёт не больше одной раздачи.
/// Раунды прошлых шузов копятся в `closed_shoes`, пока их не заберут в архив.
pub struct BaccaratTable<R: RandomSource, H: HistoryStore, B: BalanceStore> {
    config: TableConfig,
    shoe: Shoe<R>,
    shoe_id: ShoeId,
    history: H,
    balance: B,
    ids: IdGenerator,
    closed_shoes: Vec<ClosedShoe>,
    rounds_played: u64,
}

impl<R: RandomSource, H: HistoryStore, B: BalanceStore> BaccaratTable<R, H, B> {
    /// Открыть стол: новый шуз на `config.default_decks` колод, история пустая.
    pub fn new(
        config: TableConfig,
        rng: R,
        mut history: H,
        balance: B,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let ids = IdGenerator::new();
        let shoe_id = ids.next_shoe_id();
        let shoe = Shoe::new(config.default_decks, rng);
        history.clear();

        tracing::info!(shoe_id, decks = config.default_decks, "table opened");

        Ok(Self {
            config,
            shoe,
            shoe_id,
            history,
            balance,
            ids,
            closed_shoes: Vec::new(),
            rounds_played: 0,
        })
    }

    /// Собрать стол из уже существующих частей (например, из снапшота).
    pub fn from_parts(
        config: TableConfig,
        shoe: Shoe<R>,
        shoe_id: ShoeId,
        history: H,
        balance: B,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            shoe,
            shoe_id,
            history,
            balance,
            ids: IdGenerator::starting_after(shoe_id),
            closed_shoes: Vec::new(),
            rounds_played: 0,
        })
    }

    /// Восстановить архивную часть: незабранные закрытые шузы и общий счётчик раундов.
    pub fn with_archive(mut self, closed_shoes: Vec<ClosedShoe>, rounds_played: u64) -> Self {
        self.closed_shoes = closed_shoes;
        self.rounds_played = rounds_played;
        self
    }

    /// Сыграть раунд с данными ставками.
    pub fn deal(&mut self, bets: &BetMap) -> Result<DealOutcome, EngineError> {
        let outcome = deal_round(
            bets,
            &mut self.shoe,
            &mut self.history,
            &mut self.balance,
            self.shoe_id,
            &self.config.layout,
        )?;
        self.rounds_played += 1;
        Ok(outcome)
    }

    /// Новый шуз. `None` — количество колод из конфига.
    /// Раунды старого шуза уходят в `closed_shoes`, текущая история начинается заново.
    /// При ошибке старый шуз и история остаются как были.
    pub fn reset_shoe(&mut self, decks: Option<u8>) -> Result<ShoeId, EngineError> {
        let decks = decks.unwrap_or(self.config.default_decks);
        validate_deck_count(decks, MIN_DECKS, MAX_DECKS)?;
        validate_deck_count(decks, self.config.min_decks, self.config.max_decks)?;

        let closed = ClosedShoe {
            shoe_id: self.shoe_id,
            rounds: self.history.all(),
        };
        tracing::debug!(shoe_id = closed.shoe_id, rounds = closed.rounds.len(), "shoe closed");
        self.closed_shoes.push(closed);

        self.shoe.reset(decks);
        self.shoe_id = self.ids.next_shoe_id();
        self.history.clear();

        tracing::info!(shoe_id = self.shoe_id, decks, "new shoe");
        Ok(self.shoe_id)
    }

    /// Закрытые шузы, ещё не перенесённые в архив.
    pub fn closed_shoes(&self) -> &[ClosedShoe] {
        &self.closed_shoes
    }

    /// Забрать закрытые шузы для архива.
    pub fn take_closed_shoes(&mut self) -> Vec<ClosedShoe> {
        std::mem::take(&mut self.closed_shoes)
    }

    /// Сколько раундов сыграно за столом за всё время, по всем шузам.
    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Вернуть баланс к стартовому.
    pub fn reset_balance(&mut self) -> Chips {
        let start = self.config.starting_balance;
        self.balance.set(start);
        tracing::info!(balance = %start, "balance reset");
        start
    }

    pub fn roadmaps(&self) -> Roadmaps {
        compute_roadmaps(&self.history.results(), &self.config.layout)
    }

    /// Последние `config.history_window` раундов, старые первыми.
    pub fn recent_rounds(&self) -> Vec<RoundResult> {
        let all = self.history.results();
        let skip = all.len().saturating_sub(self.config.history_window);
        all.into_iter().skip(skip).collect()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn shoe(&self) -> &Shoe<R> {
        &self.shoe
    }

    pub fn shoe_id(&self) -> ShoeId {
        self.shoe_id
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn balance(&self) -> Chips {
        self.balance.get()
    }
}
