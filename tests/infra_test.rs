// tests/infra_test.rs

use baccarat_engine::{
    domain::{Card, Chips, HandResult, Rank, RoundResult, Suit, Winner},
    infra::{
        ids::IdGenerator,
        mapping::{map_hand, map_round},
        persistence::{
            records_from_json, records_to_json, BalanceStore, HistoryStore, InMemoryBalanceStore,
            InMemoryHistoryStore, RecordError, RoundRecord, RECORD_VERSION,
        },
    },
};

//
// ---------- helpers ----------
//
fn sample_round() -> RoundResult {
    RoundResult::new(
        HandResult::from_cards(vec![
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Three, Suit::Clubs),
        ]),
        HandResult::from_cards(vec![
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::King, Suit::Clubs),
        ]),
    )
}

//
// ---------- persistence ----------
//
#[test]
fn round_record_carries_current_version() {
    let rec = RoundRecord::new(3, 7, sample_round());
    assert_eq!(rec.version, RECORD_VERSION);
    assert_eq!(rec.shoe_id, 3);
    assert_eq!(rec.round_id, 7);
}

#[test]
fn records_json_roundtrip() {
    let records = vec![
        RoundRecord::new(1, 1, sample_round()),
        RoundRecord::new(1, 2, sample_round()),
    ];
    let json = records_to_json(&records).unwrap();
    let back = records_from_json(&json).unwrap();
    assert_eq!(back, records);

    // Фиксированная схема: победитель — строкой в snake_case.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["result"]["winner"], "banker");
    assert_eq!(value[0]["version"], RECORD_VERSION);
}

#[test]
fn records_with_unknown_version_are_rejected() {
    let mut rec = RoundRecord::new(1, 1, sample_round());
    rec.version = RECORD_VERSION + 1;
    let json = serde_json::to_string(&vec![rec]).unwrap();

    match records_from_json(&json) {
        Err(RecordError::UnsupportedVersion(v)) => assert_eq!(v, RECORD_VERSION + 1),
        other => panic!("unexpected {other:?}"),
    }

    assert!(matches!(records_from_json("[{"), Err(RecordError::Json(_))));
}

#[test]
fn in_memory_history_store_keeps_order() {
    let mut store = InMemoryHistoryStore::new();
    assert!(store.is_empty());

    for i in 1..=3 {
        store.append(RoundRecord::new(1, i, sample_round()));
    }
    assert_eq!(store.len(), 3);
    let ids: Vec<u64> = store.all().iter().map(|r| r.round_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(store.results().len(), 3);
    assert_eq!(store.results()[0].winner, Winner::Banker);

    store.clear();
    assert!(store.is_empty());
    assert!(store.records().is_empty());
}

#[test]
fn history_store_from_records() {
    let store = InMemoryHistoryStore::from_records(vec![RoundRecord::new(4, 1, sample_round())]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0].shoe_id, 4);
}

#[test]
fn in_memory_balance_store() {
    let mut b = InMemoryBalanceStore::new(Chips(10));
    assert_eq!(b.get(), Chips(10));
    b.set(Chips(25));
    assert_eq!(b.get(), Chips(25));
    assert_eq!(InMemoryBalanceStore::default().get(), Chips::ZERO);
}

//
// ---------- ids ----------
//
#[test]
fn id_generator_is_monotonic() {
    let ids = IdGenerator::new();
    assert_eq!(ids.next_shoe_id(), 1);
    assert_eq!(ids.next_shoe_id(), 2);

    let resumed = IdGenerator::starting_after(41);
    assert_eq!(resumed.next_shoe_id(), 42);
}

//
// ---------- mapping ----------
//
#[test]
fn mapping_round_to_dto() {
    let round = sample_round();
    let dto = map_round(&round);

    assert_eq!(dto.winner, Winner::Banker);
    assert_eq!(dto.outcome, round.outcome);
    assert_eq!(dto.player.cards.len(), 3);
    assert_eq!(dto.player.score, 7);
    assert!(dto.player.is_pair);
    assert!(!dto.player.is_natural);
    assert!(dto.banker.is_natural);

    let hand = map_hand(&round.banker);
    assert_eq!(hand.cards[0].rank, "9");
    assert_eq!(hand.cards[1].rank, "K");
    assert_eq!(hand.cards[1].value, 0);
    assert_eq!(hand.cards[1].suit, Suit::Clubs);
}
