//! RngSeed — доменно-разделённый seed для перемешивания шуза.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8; 32])
//!   - выводить seed конкретного шуза:
//!         new = H(domain || base || shoe_id || shuffle_index)
//!   - создавать DeterministicRng (native) или HashChainRng (везде) из seed
//!
//! Так любой шуз можно воспроизвести, зная базовый seed и номер шуза.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::ShoeId;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Seed из u64 (для тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed для шуза `shoe_id`, перемешивание номер `shuffle_index`.
    pub fn derive(&self, shoe_id: ShoeId, shuffle_index: u32) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(b"BACCARAT_SHOE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(shoe_id.to_le_bytes());
        hasher.update(shuffle_index.to_le_bytes());

        Self {
            bytes: hasher.finalize().into(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn to_rng(&self) -> crate::infra::rng::DeterministicRng {
        crate::infra::rng::DeterministicRng::from_seed(self.bytes)
    }

    /// RNG без `rand`, годится и для контракта.
    pub fn to_hash_rng(&self) -> crate::infra::rng::HashChainRng {
        crate::infra::rng::HashChainRng::new(self.bytes)
    }
}
