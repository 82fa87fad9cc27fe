use serde::{Deserialize, Serialize};

use crate::api::dto::CommandResponse;
use crate::api::errors::ApiError;
use crate::domain::bets::BetMap;
use crate::engine::{BaccaratTable, RandomSource};
use crate::infra::mapping::{map_deal_to_dto, map_table_to_dto};
use crate::infra::persistence::{BalanceStore, HistoryStore};

/// Команда верхнего уровня.
///
/// Эти команды превращаются в операции (`BaccaratOperation`),
/// которые Linera экспонирует наружу.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Сделать ставки и сыграть раунд.
    Deal(DealCommand),

    /// Новый шуз (перемешать), история начинается заново.
    ResetShoe(ResetShoeCommand),

    /// Вернуть баланс к стартовому.
    ResetBalance,
}

/// Раздача со ставками.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DealCommand {
    /// `{"player": 100, "tie": 50}`
    pub bets: BetMap,
}

/// Новый шуз.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResetShoeCommand {
    /// 6–8 колод; `None` — значение из конфига стола.
    pub decks: Option<u8>,
}

/// Выполнить команду над столом.
pub fn handle_command<R, H, B>(
    table: &mut BaccaratTable<R, H, B>,
    command: Command,
) -> Result<CommandResponse, ApiError>
where
    R: RandomSource,
    H: HistoryStore,
    B: BalanceStore,
{
    match command {
        Command::Deal(DealCommand { bets }) => {
            let outcome = table.deal(&bets)?;
            Ok(CommandResponse::State(map_deal_to_dto(table, &bets, &outcome)))
        }

        Command::ResetShoe(ResetShoeCommand { decks }) => {
            table.reset_shoe(decks)?;
            Ok(CommandResponse::State(map_table_to_dto(table)))
        }

        Command::ResetBalance => Ok(CommandResponse::Balance(table.reset_balance())),
    }
}
