//! Инфраструктурный слой вокруг движка баккара:
//! - генерация ID шузов;
//! - RNG-реализации для движка и seed'ы для реплея;
//! - абстракция хранения истории и баланса (off-chain / тесты);
//! - маппинги между domain/engine и API DTO.

pub mod ids;
pub mod mapping;
pub mod persistence;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use mapping::*;
pub use persistence::*;
pub use rng::*;
pub use rng_seed::RngSeed;
