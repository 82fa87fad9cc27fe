use serde::{Deserialize, Serialize};

use crate::domain::hand::{RoundResult, Winner};

/// Сетка дорожки: вектор колонок, в каждой `rows` ячеек сверху вниз.
pub type Grid<T> = Vec<Vec<Option<T>>>;

/// Одна ячейка Bead Plate (и основа ячейки Big Road).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapCell {
    pub winner: Winner,
    /// Пара у игрока или у банкира.
    pub is_pair: bool,
    /// Натурал у любой стороны.
    pub is_natural: bool,
    pub player_pair: bool,
    pub banker_pair: bool,
}

impl From<&RoundResult> for RoadmapCell {
    fn from(round: &RoundResult) -> Self {
        Self {
            winner: round.winner,
            is_pair: round.has_pair(),
            is_natural: round.is_natural(),
            player_pair: round.player.is_pair,
            banker_pair: round.banker.is_pair,
        }
    }
}

/// Ячейка Big Road. Ничьи не занимают ячеек, а копятся на последней.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BigRoadCell {
    pub cell: RoadmapCell,
    /// Сколько ничьих выпало сразу после этого раунда.
    pub ties: u32,
}

impl BigRoadCell {
    pub fn winner(&self) -> Winner {
        self.cell.winner
    }
}

/// Маркер производных дорожек.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoadColor {
    /// Узор повторяется.
    Red,
    /// Узор сломан.
    Blue,
}

/// Какая из трёх производных дорожек.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DerivedRoadKind {
    BigEyeBoy,
    SmallRoad,
    CockroachRoad,
}

impl DerivedRoadKind {
    pub const ALL: [DerivedRoadKind; 3] = [
        DerivedRoadKind::BigEyeBoy,
        DerivedRoadKind::SmallRoad,
        DerivedRoadKind::CockroachRoad,
    ];

    /// Насколько колонок влево смотрит дорожка.
    pub const fn offset(self) -> usize {
        match self {
            DerivedRoadKind::BigEyeBoy => 1,
            DerivedRoadKind::SmallRoad => 2,
            DerivedRoadKind::CockroachRoad => 3,
        }
    }

    /// Сколько колонок Big Road нужно, прежде чем появится первый маркер.
    pub const fn min_columns(self) -> usize {
        self.offset() + 1
    }
}

/// Производная дорожка: маркеры по порядку и они же, разложенные по сетке.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DerivedRoad {
    pub markers: Vec<RoadColor>,
    pub grid: Grid<RoadColor>,
}

/// Геометрия сеток.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadLayout {
    /// Высота всех сеток.
    pub rows: usize,
    /// Строка, на которой серия поворачивает вправо ("хвост дракона").
    pub tail_row: usize,
}

impl Default for RoadLayout {
    fn default() -> Self {
        Self { rows: 6, tail_row: 4 }
    }
}

/// Все пять дорожек. Полностью пересчитываются из истории.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Roadmaps {
    pub bead_plate: Grid<RoadmapCell>,
    pub big_road: Grid<BigRoadCell>,
    /// Ничьи до первого не-ничейного раунда (им некого пометить).
    pub leading_ties: u32,
    pub big_eye_boy: DerivedRoad,
    pub small_road: DerivedRoad,
    pub cockroach_road: DerivedRoad,
}

impl Roadmaps {
    pub fn derived(&self, kind: DerivedRoadKind) -> &DerivedRoad {
        match kind {
            DerivedRoadKind::BigEyeBoy => &self.big_eye_boy,
            DerivedRoadKind::SmallRoad => &self.small_road,
            DerivedRoadKind::CockroachRoad => &self.cockroach_road,
        }
    }
}
