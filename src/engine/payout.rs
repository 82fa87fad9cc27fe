use serde::{Deserialize, Serialize};

use crate::domain::bets::{BetMap, BetType};
use crate::domain::chips::Chips;
use crate::domain::hand::{RoundResult, Winner};
use crate::engine::errors::EngineError;

/// Сколько возвращается на 1 фишку выигравшей ставки, в сотых (вместе со ставкой).
const PLAYER_RETURN: u64 = 200; // 1:1
const BANKER_RETURN: u64 = 195; // 0.95:1, комиссия 5%
const TIE_RETURN: u64 = 900; // 8:1
const PAIR_RETURN: u64 = 1200; // 11:1

/// Итог расчёта ставок за раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    /// Всё, что вернулось игроку (выигрыши + возвращённые ставки).
    pub winnings: Chips,
    /// Сумма всех поставленных фишек.
    pub total_stake: Chips,
    /// `winnings - total_stake`.
    pub balance_delta: i64,
}

/// Проверка ставок до сдачи карт.
pub fn validate_bets(bets: &BetMap, balance: Chips) -> Result<Chips, EngineError> {
    let stake = bets.total();
    if stake.is_zero() {
        return Err(EngineError::EmptyBetSet);
    }
    if stake > balance {
        return Err(EngineError::InsufficientBalance { stake, balance });
    }
    Ok(stake)
}

/// Сколько возвращается по одной ставке (0, если проиграла).
pub fn bet_return(bet: BetType, stake: Chips, result: &RoundResult) -> Chips {
    let ratio = match bet {
        BetType::Player => match result.winner {
            Winner::Player => PLAYER_RETURN,
            Winner::Tie => 100, // push
            Winner::Banker => 0,
        },
        BetType::Banker => match result.winner {
            Winner::Banker => BANKER_RETURN,
            Winner::Tie => 100, // push
            Winner::Player => 0,
        },
        BetType::Tie if result.winner == Winner::Tie => TIE_RETURN,
        BetType::PlayerPair if result.player.is_pair => PAIR_RETURN,
        BetType::BankerPair if result.banker.is_pair => PAIR_RETURN,
        _ => 0,
    };
    stake.mul_ratio(ratio, 100)
}

/// Рассчитать ставки по результату раунда.
pub fn settle(bets: &BetMap, result: &RoundResult) -> Settlement {
    let winnings: Chips = bets
        .iter()
        .map(|(bet, stake)| bet_return(bet, stake, result))
        .sum();
    let total_stake = bets.total();

    Settlement {
        winnings,
        total_stake,
        balance_delta: winnings.signed_diff(total_stake),
    }
}
