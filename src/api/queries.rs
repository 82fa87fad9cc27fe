use serde::{Deserialize, Serialize};

use crate::api::dto::{GameStateDto, RoundDto};
use crate::domain::roadmap::Roadmaps;
use crate::engine::{BaccaratTable, RandomSource};
use crate::infra::mapping::{map_round, map_table_to_dto};
use crate::infra::persistence::{BalanceStore, HistoryStore};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Полное состояние стола.
    GetState,

    /// Только дорожки (обновление табло).
    GetRoadmaps,

    /// Вся история текущего шуза.
    GetHistory,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    State(GameStateDto),
    Roadmaps(Roadmaps),
    History(Vec<RoundDto>),
}

pub fn handle_query<R, H, B>(table: &BaccaratTable<R, H, B>, query: Query) -> QueryResponse
where
    R: RandomSource,
    H: HistoryStore,
    B: BalanceStore,
{
    match query {
        Query::GetState => QueryResponse::State(map_table_to_dto(table)),
        Query::GetRoadmaps => QueryResponse::Roadmaps(table.roadmaps()),
        Query::GetHistory => {
            QueryResponse::History(table.history().results().iter().map(map_round).collect())
        }
    }
}
