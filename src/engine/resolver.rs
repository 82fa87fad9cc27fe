use crate::domain::hand::{score, HandResult, RoundResult};
use crate::domain::shoe::Shoe;
use crate::engine::rules::{banker_draws, is_natural, player_draws};
use crate::engine::RandomSource;

/// Сыграть один раунд из шуза.
///
/// Порядок сдачи фиксирован: игрок, игрок, банкир, банкир.
/// Дальше натурал или добор по таблице из `rules`.
/// Ошибок нет: пустой шуз сам перемешивается.
pub fn resolve_round<R: RandomSource>(shoe: &mut Shoe<R>) -> RoundResult {
    let mut player = vec![shoe.draw(), shoe.draw()];
    let mut banker = vec![shoe.draw(), shoe.draw()];

    let player_two = score(&player);
    let banker_two = score(&banker);

    if !is_natural(player_two) && !is_natural(banker_two) {
        let player_third = if player_draws(player_two) {
            let card = shoe.draw();
            player.push(card);
            Some(card.value())
        } else {
            None
        };

        if banker_draws(banker_two, player_third) {
            banker.push(shoe.draw());
        }
    }

    let result = RoundResult::new(
        HandResult::from_cards(player),
        HandResult::from_cards(banker),
    );

    tracing::debug!(
        player_score = result.player.score,
        banker_score = result.banker.score,
        player_cards = result.player.cards.len(),
        banker_cards = result.banker.cards.len(),
        winner = %result.winner,
        "round resolved"
    );

    result
}
