use crate::api::dto::{
    CardDto, CurrentRoundDto, GameStateDto, HandDto, RoundDto, RoundPhase, ShoeDto, UserDto,
};
use crate::domain::bets::BetMap;
use crate::domain::card::Card;
use crate::domain::hand::{HandResult, RoundResult};
use crate::domain::roadmap::Roadmaps;
use crate::engine::{BaccaratTable, DealOutcome, RandomSource};
use crate::infra::persistence::{BalanceStore, HistoryStore};

pub fn map_card(card: &Card) -> CardDto {
    CardDto {
        suit: card.suit,
        rank: card.rank.to_string(),
        value: card.value(),
    }
}

pub fn map_hand(hand: &HandResult) -> HandDto {
    HandDto {
        cards: hand.cards.iter().map(map_card).collect(),
        score: hand.score,
        is_pair: hand.is_pair,
        is_natural: hand.is_natural,
    }
}

pub fn map_round(round: &RoundResult) -> RoundDto {
    RoundDto {
        player: map_hand(&round.player),
        banker: map_hand(&round.banker),
        winner: round.winner,
        outcome: round.outcome.clone(),
    }
}

/// Утилита: маппинг стола -> GameStateDto (фаза ставок).
pub fn map_table_to_dto<R, H, B>(table: &BaccaratTable<R, H, B>) -> GameStateDto
where
    R: RandomSource,
    H: HistoryStore,
    B: BalanceStore,
{
    map_table_with_roads(table, table.roadmaps())
}

fn map_table_with_roads<R, H, B>(table: &BaccaratTable<R, H, B>, roadmaps: Roadmaps) -> GameStateDto
where
    R: RandomSource,
    H: HistoryStore,
    B: BalanceStore,
{
    let shoe = table.shoe();

    GameStateDto {
        user: UserDto {
            balance: table.balance(),
        },
        shoe: ShoeDto {
            shoe_id: table.shoe_id(),
            decks: shoe.decks(),
            remaining_cards: shoe.remaining(),
            dealt_cards: shoe.dealt(),
            shuffles: shoe.shuffles(),
        },
        current_round: CurrentRoundDto::betting(),
        roadmaps,
        history: table.recent_rounds().iter().map(map_round).collect(),
    }
}

/// То же, но с результатом только что сыгранного раунда (фаза выплат).
/// Дорожки берутся из `outcome`, второй раз не считаются.
pub fn map_deal_to_dto<R, H, B>(
    table: &BaccaratTable<R, H, B>,
    bets: &BetMap,
    outcome: &DealOutcome,
) -> GameStateDto
where
    R: RandomSource,
    H: HistoryStore,
    B: BalanceStore,
{
    let mut state = map_table_with_roads(table, outcome.roadmaps.clone());
    state.current_round = CurrentRoundDto {
        status: RoundPhase::Payout,
        bets: bets.clone(),
        round_id: Some(outcome.round_id),
        result: Some(map_round(&outcome.result)),
        winnings: Some(outcome.settlement.winnings),
        balance_delta: Some(outcome.balance_delta),
    };
    state
}
