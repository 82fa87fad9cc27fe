//! Главный модуль приложения Baccarat на Linera.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response) и
//! связываем contract/service с нашим BaccaratState.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod state;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, Query, QueryResponse};
use crate::state::BaccaratState;

/// Операции (внешние команды), которые модуль принимает.
///
/// Одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BaccaratOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera.
/// Стол один, общаться не с кем – пустой enum.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum BaccaratMessage {}

/// Запросы к сервису (read-only).
pub type BaccaratQuery = Query;

/// Ответы на запросы.
pub type BaccaratResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct BaccaratAbi;

impl ContractAbi for BaccaratAbi {
    type Operation = BaccaratOperation;
    type Response = ();
}

impl ServiceAbi for BaccaratAbi {
    type Query = BaccaratQuery;
    type QueryResponse = BaccaratResponse;
}

/// Тип состояния приложения (для contract/service).
pub type Storage = BaccaratState;
