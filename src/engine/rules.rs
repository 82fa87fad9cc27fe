//! Правила добора третьей карты (tableau).
//!
//! Чистые функции без состояния: их удобно проверять перебором всех случаев.

/// Натурал: 8 или 9 на двух картах. Если он у любой стороны, никто не добирает.
pub fn is_natural(two_card_score: u8) -> bool {
    two_card_score >= 8
}

/// Игрок добирает на 0–5, стоит на 6–7.
pub fn player_draws(player_score: u8) -> bool {
    player_score <= 5
}

/// Добирает ли банкир.
///
/// `player_third`: очки третьей карты игрока, `None` если игрок стоял.
pub fn banker_draws(banker_score: u8, player_third: Option<u8>) -> bool {
    let Some(p) = player_third else {
        // Игрок стоял: банкир играет как игрок.
        return banker_score <= 5;
    };

    match banker_score {
        0..=2 => true,
        3 => p != 8,
        4 => (2..=7).contains(&p),
        5 => (4..=7).contains(&p),
        6 => p == 6 || p == 7,
        _ => false,
    }
}
