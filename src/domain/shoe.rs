use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Карт в одной колоде.
pub const CARDS_PER_DECK: usize = 52;

/// Одна колода в порядке: Hearts A..K, Diamonds A..K, Clubs A..K, Spades A..K.
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(CARDS_PER_DECK);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Шуз: несколько колод, перемешанных вместе.
///
/// Инвариант: `dealt + remaining == decks * 52` в любой момент.
/// Когда карты кончаются, `draw()` сам собирает и перемешивает шуз заново
/// (частично сданный шуз через границу перемешивания не переносится).
#[derive(Clone, Debug)]
pub struct Shoe<R: RandomSource> {
    decks: u8,
    cards: Vec<Card>,
    /// Сколько карт выдано с последнего перемешивания.
    dealt: usize,
    /// Сколько раз шуз перемешивался (включая первое).
    shuffles: u32,
    rng: R,
}

impl<R: RandomSource> Shoe<R> {
    /// Собрать `decks * 52` карт и перемешать. Пустой шуз не бывает: минимум одна колода.
    pub fn new(decks: u8, rng: R) -> Self {
        let mut shoe = Self {
            decks: decks.max(1),
            cards: Vec::new(),
            dealt: 0,
            shuffles: 0,
            rng,
        };
        shoe.reshuffle();
        shoe
    }

    /// Восстановить шуз из сохранённого состояния.
    ///
    /// Если `cards.len() + dealt` не сходится с `decks * 52`,
    /// шуз считается испорченным и перемешивается заново.
    pub fn from_parts(decks: u8, cards: Vec<Card>, dealt: usize, shuffles: u32, rng: R) -> Self {
        let mut shoe = Self {
            decks: decks.max(1),
            cards,
            dealt,
            shuffles,
            rng,
        };
        if shoe.cards.len() + shoe.dealt != shoe.total_cards() {
            tracing::warn!(
                decks,
                remaining = shoe.cards.len(),
                dealt,
                "shoe snapshot is inconsistent, reshuffling"
            );
            shoe.reshuffle();
        }
        shoe
    }

    /// Полная пересборка и перемешивание (Fisher–Yates через RandomSource).
    pub fn reshuffle(&mut self) {
        let mut cards = Vec::with_capacity(self.total_cards());
        for _ in 0..self.decks {
            cards.extend(standard_deck());
        }
        self.rng.shuffle(&mut cards);

        self.cards = cards;
        self.dealt = 0;
        self.shuffles += 1;
    }

    /// Заменить шуз целиком: новое количество колод, счётчики с нуля.
    pub fn reset(&mut self, decks: u8) {
        self.decks = decks.max(1);
        self.shuffles = 0;
        self.reshuffle();
    }

    /// Взять верхнюю карту. На пустом шузе сначала перемешивает заново.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                self.dealt += 1;
                return card;
            }
            tracing::debug!(decks = self.decks, "shoe exhausted, reshuffling");
            self.reshuffle();
        }
    }

    pub fn decks(&self) -> u8 {
        self.decks
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn dealt(&self) -> usize {
        self.dealt
    }

    pub fn shuffles(&self) -> u32 {
        self.shuffles
    }

    pub fn total_cards(&self) -> usize {
        self.decks as usize * CARDS_PER_DECK
    }

    /// Оставшиеся карты (верх шуза — последний элемент).
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
