//! Внешний API стола баккара.
//!
//! Команды (`commands`) меняют стол: раздача, новый шуз, сброс баланса.
//! Запросы (`queries`) только читают. `dto` описывает то, что уходит фронту,
//! `errors` – то, что клиент видит при отказе.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
