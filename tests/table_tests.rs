//! Стол целиком: раздача, сброс шуза, сброс баланса, снапшоты.
//!
//! Эти тесты проверяют:
//! - отклонённая раздача ничего не меняет (шуз, история, баланс)
//! - раздача пишет историю, баланс и отдаёт дорожки
//! - reset_shoe проверяет 6..=8 и начинает историю заново
//! - раунды прошлых шузов уходят в closed_shoes
//! - конфиг не может расширить диапазон колод
//! - снапшот стола восстанавливается без потерь
//! - один seed → одна и та же последовательность раундов

use baccarat_engine::domain::*;
use baccarat_engine::engine::{self, BaccaratTable, EngineError, RandomSource};
use baccarat_engine::infra::{
    BalanceStore, DeterministicRng, HistoryStore, InMemoryBalanceStore, InMemoryHistoryStore,
    RngSeed, RoundRecord,
};
use baccarat_engine::state::TableSnapshot;

type TestTable = BaccaratTable<DeterministicRng, InMemoryHistoryStore, InMemoryBalanceStore>;

fn make_table(seed: u64, balance: u64) -> TestTable {
    BaccaratTable::new(
        TableConfig::default(),
        RngSeed::from_u64(seed).derive(1, 0).to_rng(),
        InMemoryHistoryStore::new(),
        InMemoryBalanceStore::new(Chips(balance)),
    )
    .expect("default config is valid")
}

fn banker_100() -> BetMap {
    BetMap::new().with(BetType::Banker, Chips(100))
}

/// Сколько карт ушло на раунд.
fn cards_used(result: &RoundResult) -> usize {
    result.player.cards.len() + result.banker.cards.len()
}

//
// ============= TEST 1: Открытие стола ============
//
#[test]
fn new_table_starts_fresh_shoe_and_empty_history() {
    let mut stale = InMemoryHistoryStore::new();
    let old = {
        let mut t = make_table(1, 1_000);
        t.deal(&banker_100()).unwrap().result
    };
    stale.append(RoundRecord::new(99, 1, old));

    let table = BaccaratTable::new(
        TableConfig::default(),
        DeterministicRng::from_u64(3),
        stale,
        InMemoryBalanceStore::new(Chips(500)),
    )
    .unwrap();

    assert_eq!(table.shoe_id(), 1);
    assert_eq!(table.shoe().decks(), 8);
    assert_eq!(table.shoe().remaining(), 8 * 52);
    assert!(table.history().is_empty());
    assert_eq!(table.balance(), Chips(500));
    assert_eq!(table.roadmaps(), Roadmaps::default());
}

#[test]
fn new_table_rejects_bad_config() {
    let cfg = TableConfig {
        min_decks: 9,
        ..TableConfig::default()
    };
    let res = BaccaratTable::new(
        cfg,
        DeterministicRng::from_u64(0),
        InMemoryHistoryStore::new(),
        InMemoryBalanceStore::new(Chips(100)),
    );
    assert!(matches!(res, Err(EngineError::InvalidConfig(_))));
}

//
// ============= TEST 2: Раздача ============
//
#[test]
fn rejected_deal_changes_nothing() {
    let mut table = make_table(7, 50);
    let remaining = table.shoe().remaining();

    let err = table.deal(&banker_100()).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientBalance {
            stake: Chips(100),
            balance: Chips(50),
        }
    );

    let err = table.deal(&BetMap::new()).unwrap_err();
    assert_eq!(err, EngineError::EmptyBetSet);

    assert_eq!(table.shoe().remaining(), remaining);
    assert_eq!(table.shoe().dealt(), 0);
    assert!(table.history().is_empty());
    assert_eq!(table.balance(), Chips(50));
}

#[test]
fn deal_updates_history_balance_and_shoe() {
    let mut table = make_table(11, 1_000);

    let outcome = table.deal(&banker_100()).unwrap();
    assert_eq!(outcome.round_id, 1);
    assert_eq!(outcome.balance_delta, outcome.settlement.balance_delta);
    assert_eq!(
        outcome.balance,
        Chips(1_000).apply_delta(outcome.balance_delta)
    );
    assert_eq!(table.balance(), outcome.balance);

    let expected_delta = match outcome.result.winner {
        Winner::Banker => 95,
        Winner::Tie => 0,
        Winner::Player => -100,
    };
    assert_eq!(outcome.balance_delta, expected_delta);

    assert_eq!(table.history().len(), 1);
    let record = &table.history().all()[0];
    assert_eq!(record.shoe_id, table.shoe_id());
    assert_eq!(record.round_id, 1);
    assert_eq!(record.result, outcome.result);

    assert_eq!(table.shoe().dealt(), cards_used(&outcome.result));
    assert_eq!(outcome.roadmaps, table.roadmaps());
}

#[test]
fn round_ids_are_sequential_within_shoe() {
    let mut table = make_table(12, 100_000);
    for expected in 1..=20u64 {
        let outcome = table.deal(&banker_100()).unwrap();
        assert_eq!(outcome.round_id, expected);
    }
    assert_eq!(table.history().len(), 20);

    let bead_count: usize = table
        .roadmaps()
        .bead_plate
        .iter()
        .map(|col| col.iter().flatten().count())
        .sum();
    assert_eq!(bead_count, 20);
}

#[test]
fn recent_rounds_are_windowed_oldest_first() {
    let mut table = make_table(13, 100_000);
    let mut all = Vec::new();
    for _ in 0..15 {
        all.push(table.deal(&banker_100()).unwrap().result);
    }

    let recent = table.recent_rounds();
    assert_eq!(recent.len(), table.config().history_window);
    assert_eq!(recent, all[5..].to_vec());
}

#[test]
fn all_in_loss_leaves_zero_and_blocks_next_deal() {
    let mut table = make_table(14, 100);
    // Всё на ничью, пока баланс не кончится.
    for _ in 0..200 {
        let balance = table.balance();
        if balance.is_zero() {
            break;
        }
        let bets = BetMap::new().with(BetType::Tie, balance);
        let out = table.deal(&bets).unwrap();
        if out.result.winner != Winner::Tie {
            assert_eq!(out.balance, Chips::ZERO);
        }
    }
    assert_eq!(table.balance(), Chips::ZERO);

    let rounds = table.history().len();
    assert_eq!(
        table.deal(&BetMap::new().with(BetType::Player, Chips(1))),
        Err(EngineError::InsufficientBalance {
            stake: Chips(1),
            balance: Chips::ZERO,
        })
    );
    assert_eq!(table.history().len(), rounds);
}

//
// ============= TEST 3: Новый шуз ============
//
#[test]
fn reset_shoe_rejects_out_of_range_decks() {
    let mut table = make_table(21, 1_000);
    table.deal(&banker_100()).unwrap();
    let dealt = table.shoe().dealt();

    for bad in [0u8, 5, 9] {
        assert_eq!(table.reset_shoe(Some(bad)), Err(EngineError::InvalidDeckCount(bad)));
    }

    assert_eq!(table.shoe_id(), 1);
    assert_eq!(table.shoe().dealt(), dealt);
    assert_eq!(table.history().len(), 1);
}

#[test]
fn reset_shoe_starts_new_history() {
    let mut table = make_table(22, 1_000);
    table.deal(&banker_100()).unwrap();
    table.deal(&banker_100()).unwrap();
    let balance = table.balance();

    let id = table.reset_shoe(Some(6)).unwrap();
    assert_eq!(id, 2);
    assert_eq!(table.shoe_id(), 2);
    assert_eq!(table.shoe().decks(), 6);
    assert_eq!(table.shoe().remaining(), 6 * 52);
    assert!(table.history().is_empty());
    assert_eq!(table.roadmaps(), Roadmaps::default());
    assert_eq!(table.balance(), balance, "balance survives a new shoe");

    // Нумерация раундов в новом шузе снова с 1.
    assert_eq!(table.deal(&banker_100()).unwrap().round_id, 1);

    // Без явного количества — значение из конфига.
    assert_eq!(table.reset_shoe(None).unwrap(), 3);
    assert_eq!(table.shoe().decks(), 8);
}

#[test]
fn reset_shoe_moves_old_rounds_to_closed_shoes() {
    let mut table = make_table(24, 1_000);
    for _ in 0..3 {
        table.deal(&banker_100()).unwrap();
    }
    let first_shoe = table.history().all();

    table.reset_shoe(None).unwrap();
    table.deal(&banker_100()).unwrap();
    assert!(table.deal(&BetMap::new()).is_err());
    table.reset_shoe(Some(6)).unwrap();

    // Неудачный сброс ничего не закрывает.
    assert!(table.reset_shoe(Some(9)).is_err());

    let closed = table.closed_shoes();
    assert_eq!(closed.len(), 2);
    assert_eq!(closed[0].shoe_id, 1);
    assert_eq!(closed[0].rounds, first_shoe);
    assert_eq!(closed[1].shoe_id, 2);
    assert_eq!(closed[1].rounds.len(), 1);
    assert_eq!(closed[1].rounds[0].round_id, 1);
    assert_eq!(table.rounds_played(), 4);

    // Снапшот переносит незабранный архив и счётчик.
    let restored = TableSnapshot::from_table(&table)
        .into_table(DeterministicRng::from_u64(1))
        .unwrap();
    assert_eq!(restored.closed_shoes(), table.closed_shoes());
    assert_eq!(restored.rounds_played(), 4);

    let taken = table.take_closed_shoes();
    assert_eq!(taken.len(), 2);
    assert!(table.closed_shoes().is_empty());
    assert_eq!(table.rounds_played(), 4);
}

#[test]
fn config_cannot_widen_deck_range() {
    let wide = TableConfig::from_json_str(r#"{"min_decks": 1, "max_decks": 12}"#);
    assert!(matches!(wide, Err(EngineError::InvalidConfig(_))));

    for (min, max, default) in [(1, 8, 6), (5, 8, 6), (6, 12, 8), (6, 9, 8)] {
        let cfg = TableConfig {
            min_decks: min,
            max_decks: max,
            default_decks: default,
            ..TableConfig::default()
        };
        let res = BaccaratTable::new(
            cfg,
            DeterministicRng::from_u64(0),
            InMemoryHistoryStore::new(),
            InMemoryBalanceStore::new(Chips(100)),
        );
        assert!(matches!(res, Err(EngineError::InvalidConfig(_))), "{min}..={max}");
    }

    // Снапшот с расширенным диапазоном тоже не восстанавливается.
    let mut snap = TableSnapshot::from_table(&make_table(25, 100));
    snap.config.min_decks = 1;
    snap.config.max_decks = 12;
    assert!(matches!(
        snap.into_table(DeterministicRng::from_u64(0)),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn narrower_config_range_is_respected() {
    let cfg = TableConfig {
        min_decks: 7,
        max_decks: 7,
        default_decks: 7,
        ..TableConfig::default()
    };
    let mut table = BaccaratTable::new(
        cfg,
        DeterministicRng::from_u64(0),
        InMemoryHistoryStore::new(),
        InMemoryBalanceStore::new(Chips(100)),
    )
    .unwrap();

    for bad in [2u8, 6, 8, 12] {
        assert_eq!(table.reset_shoe(Some(bad)), Err(EngineError::InvalidDeckCount(bad)));
    }
    assert_eq!(table.shoe_id(), 1);
    assert_eq!(table.reset_shoe(Some(7)), Ok(2));
    assert_eq!(table.shoe().remaining(), 7 * 52);
}

#[test]
fn free_reset_shoe_checks_range() {
    assert!(engine::reset_shoe(5, DeterministicRng::from_u64(1)).is_err());
    assert!(engine::reset_shoe(9, DeterministicRng::from_u64(1)).is_err());

    let shoe = engine::reset_shoe(7, DeterministicRng::from_u64(1)).unwrap();
    assert_eq!(shoe.decks(), 7);
    assert_eq!(shoe.remaining(), 7 * 52);
}

#[test]
fn reset_balance_restores_starting_balance() {
    let mut table = make_table(23, 10_000);
    table.deal(&banker_100()).unwrap();

    assert_eq!(table.reset_balance(), Chips(10_000));
    assert_eq!(table.balance(), Chips(10_000));
    assert_eq!(table.history().len(), 1, "history is kept");
}

//
// ============= TEST 4: Свободная функция deal_round ============
//
#[test]
fn deal_round_works_with_plain_parts() {
    let mut shoe = Shoe::new(6, DeterministicRng::from_u64(31));
    let mut history = InMemoryHistoryStore::new();
    let mut balance = InMemoryBalanceStore::new(Chips(300));
    let layout = RoadLayout::default();

    let out = engine::deal_round(&banker_100(), &mut shoe, &mut history, &mut balance, 5, &layout)
        .unwrap();
    assert_eq!(history.records()[0].shoe_id, 5);
    assert_eq!(balance.get(), out.balance);

    let err = engine::deal_round(
        &BetMap::new().with(BetType::Player, Chips(10_000)),
        &mut shoe,
        &mut history,
        &mut balance,
        5,
        &layout,
    );
    assert!(err.is_err());
    assert_eq!(history.len(), 1);
}

//
// ============= TEST 5: Снапшоты и детерминизм ============
//
#[test]
fn snapshot_roundtrip_preserves_next_round() {
    let mut table = make_table(41, 5_000);
    for _ in 0..7 {
        table.deal(&banker_100()).unwrap();
    }

    let snap = TableSnapshot::from_table(&table);
    let json = serde_json::to_string(&snap).unwrap();
    let back: TableSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);

    let mut restored = back.into_table(DeterministicRng::from_u64(999)).unwrap();
    assert_eq!(restored.shoe_id(), table.shoe_id());
    assert_eq!(restored.balance(), table.balance());
    assert_eq!(restored.history().all(), table.history().all());
    assert_eq!(restored.roadmaps(), table.roadmaps());

    // Карты в шузе те же → следующий раунд тот же.
    let a = table.deal(&banker_100()).unwrap();
    let b = restored.deal(&banker_100()).unwrap();
    assert_eq!(a.result, b.result);
    assert_eq!(a.round_id, b.round_id);

    // Следующий шуз получает новый ID, а не повтор.
    assert_eq!(restored.reset_shoe(None).unwrap(), table.shoe_id() + 1);
}

#[test]
fn seeded_restore_reshuffles_the_same_way() {
    let mut table = make_table(43, 1_000_000);
    for _ in 0..5 {
        table.deal(&banker_100()).unwrap();
    }
    let snap = TableSnapshot::from_table(&table);
    let base = RngSeed::from_u64(2026);

    let mut a = snap.clone().into_seeded_table(&base).unwrap();
    let mut b = snap.into_seeded_table(&base).unwrap();

    // 120 раундов не помещаются в 8 колод: будет перемешивание.
    for _ in 0..120 {
        assert_eq!(
            a.deal(&banker_100()).unwrap().result,
            b.deal(&banker_100()).unwrap().result
        );
    }
    assert!(a.shoe().shuffles() > 1);
    assert_eq!(a.shoe().cards(), b.shoe().cards());

    a.reset_shoe(None).unwrap();
    b.reset_shoe(None).unwrap();
    assert_eq!(a.shoe().cards(), b.shoe().cards());
}

#[test]
fn same_seed_same_rounds() {
    let mut a = make_table(77, 100_000);
    let mut b = make_table(77, 100_000);
    for _ in 0..30 {
        assert_eq!(
            a.deal(&banker_100()).unwrap().result,
            b.deal(&banker_100()).unwrap().result
        );
    }

    let mut c = make_table(78, 100_000);
    let differs = (0..30).any(|_| {
        a.deal(&banker_100()).unwrap().result != c.deal(&banker_100()).unwrap().result
    });
    assert!(differs, "different seeds should not replay the same shoe");
}

/// RNG, который ничего не перемешивает: шуз в порядке standard_deck.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

#[test]
fn table_works_with_any_random_source() {
    let mut table = BaccaratTable::new(
        TableConfig::default(),
        DummyRng,
        InMemoryHistoryStore::new(),
        InMemoryBalanceStore::new(Chips(1_000)),
    )
    .unwrap();

    let outcome = table.deal(&banker_100()).unwrap();
    let top: Vec<Card> = standard_deck().into_iter().rev().take(4).collect();
    assert_eq!(outcome.result.player.cards[..2], top[..2]);
    assert_eq!(outcome.result.banker.cards[..2], top[2..4]);
}
