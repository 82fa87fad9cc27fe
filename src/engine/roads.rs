//! Дорожки (roadmaps): Bead Plate, Big Road и три производные.
//!
//! Всё считается заново из полной истории при каждом вызове, никакого
//! состояния между вызовами нет: одинаковая история → одинаковые сетки.

use crate::domain::hand::{RoundResult, Winner};
use crate::domain::roadmap::{
    BigRoadCell, DerivedRoad, DerivedRoadKind, Grid, RoadColor, RoadLayout, RoadmapCell, Roadmaps,
};

/// Big Road в двух видах: логические колонки (серии) и разложенная сетка.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BigRoad {
    /// Серии одинаковых победителей без учёта хвоста дракона.
    pub columns: Vec<Vec<BigRoadCell>>,
    pub grid: Grid<BigRoadCell>,
    pub leading_ties: u32,
}

impl BigRoad {
    /// Длины логических колонок: на них смотрят производные дорожки.
    pub fn column_lengths(&self) -> Vec<usize> {
        self.columns.iter().map(Vec::len).collect()
    }
}

/// Пересчитать все пять дорожек.
pub fn compute_roadmaps(history: &[RoundResult], layout: &RoadLayout) -> Roadmaps {
    let big = big_road(history, layout);
    let lengths = big.column_lengths();

    let derived = |kind: DerivedRoadKind| {
        let markers = derived_markers(&lengths, kind.offset());
        let grid = place_markers(&markers, layout);
        DerivedRoad { markers, grid }
    };

    Roadmaps {
        bead_plate: bead_plate(history, layout.rows),
        big_eye_boy: derived(DerivedRoadKind::BigEyeBoy),
        small_road: derived(DerivedRoadKind::SmallRoad),
        cockroach_road: derived(DerivedRoadKind::CockroachRoad),
        big_road: big.grid,
        leading_ties: big.leading_ties,
    }
}

/// Bead Plate: раунды по порядку, сверху вниз, потом следующая колонка.
/// Ничьи занимают свою ячейку.
pub fn bead_plate(history: &[RoundResult], rows: usize) -> Grid<RoadmapCell> {
    let rows = rows.max(1);
    let mut grid: Grid<RoadmapCell> = Vec::new();

    for (i, round) in history.iter().enumerate() {
        set_cell(&mut grid, i / rows, i % rows, RoadmapCell::from(round), rows);
    }

    grid
}

/// Big Road: ничьи не создают ячеек, а помечают последнюю не-ничейную.
pub fn big_road(history: &[RoundResult], layout: &RoadLayout) -> BigRoad {
    let mut columns: Vec<Vec<BigRoadCell>> = Vec::new();
    let mut leading_ties = 0u32;

    for round in history {
        if round.winner == Winner::Tie {
            match columns.last_mut().and_then(|col| col.last_mut()) {
                Some(last) => last.ties += 1,
                None => leading_ties += 1,
            }
            continue;
        }

        let cell = BigRoadCell {
            cell: RoadmapCell::from(round),
            ties: 0,
        };

        match columns.last_mut() {
            Some(col) if col[0].winner() == cell.winner() => col.push(cell),
            _ => columns.push(vec![cell]),
        }
    }

    let grid = place_streaks(&columns, layout);

    BigRoad {
        columns,
        grid,
        leading_ties,
    }
}

/// Маркеры производной дорожки со смещением `offset`
/// (1 — Big Eye Boy, 2 — Small Road, 3 — Cockroach Road).
///
/// Для каждой записи Big Road в колонке `c`, строке `r`:
/// - маркера нет, пока `c < offset` или (`c == offset` и `r == 0`);
/// - `r == 0`: красный, если колонки `c-1` и `c-1-offset` одной длины;
/// - `r >= 1`: смотрим колонку `c-offset`: синий, если её длина ровно `r`
///   (там серия оборвалась), иначе красный.
pub fn derived_markers(column_lengths: &[usize], offset: usize) -> Vec<RoadColor> {
    let mut markers = Vec::new();

    for (c, &len) in column_lengths.iter().enumerate() {
        for r in 0..len {
            if c < offset || (c == offset && r == 0) {
                continue;
            }

            let repeats = if r == 0 {
                column_lengths[c - 1] == column_lengths[c - 1 - offset]
            } else {
                column_lengths[c - offset] != r
            };

            markers.push(if repeats { RoadColor::Red } else { RoadColor::Blue });
        }
    }

    markers
}

/// Разложить маркеры по сетке тем же правилом, что и Big Road:
/// одинаковый цвет = одна серия.
pub fn place_markers(markers: &[RoadColor], layout: &RoadLayout) -> Grid<RoadColor> {
    let mut streaks: Vec<Vec<RoadColor>> = Vec::new();
    for &m in markers {
        match streaks.last_mut() {
            Some(s) if s[0] == m => s.push(m),
            _ => streaks.push(vec![m]),
        }
    }
    place_streaks(&streaks, layout)
}

/// Раскладка серий по сетке с "хвостом дракона".
///
/// Новая серия начинается в строке 0 колонки, следующей за началом
/// предыдущей серии (пропуская колонки, где строка 0 уже занята).
/// Серия идёт вниз, пока строка меньше `tail_row` и ячейка ниже свободна,
/// после чего поворачивает вправо и дальше идёт только вправо.
pub fn place_streaks<T: Copy>(streaks: &[Vec<T>], layout: &RoadLayout) -> Grid<T> {
    let rows = layout.rows.max(1);
    let tail_row = layout.tail_row.min(rows - 1);
    let mut grid: Grid<T> = Vec::new();
    let mut start_col: Option<usize> = None;

    for streak in streaks {
        let mut col = start_col.map_or(0, |c| c + 1);
        while is_occupied(&grid, col, 0) {
            col += 1;
        }
        start_col = Some(col);

        let mut row = 0;
        let mut turned = false;

        for (i, &item) in streak.iter().enumerate() {
            if i > 0 {
                if !turned && row < tail_row && !is_occupied(&grid, col, row + 1) {
                    row += 1;
                } else {
                    turned = true;
                    col += 1;
                    while is_occupied(&grid, col, row) {
                        col += 1;
                    }
                }
            }
            set_cell(&mut grid, col, row, item, rows);
        }
    }

    grid
}

fn is_occupied<T>(grid: &Grid<T>, col: usize, row: usize) -> bool {
    grid.get(col)
        .and_then(|column| column.get(row))
        .map_or(false, Option::is_some)
}

fn set_cell<T: Copy>(grid: &mut Grid<T>, col: usize, row: usize, item: T, rows: usize) {
    while grid.len() <= col {
        grid.push(vec![None; rows]);
    }
    grid[col][row] = Some(item);
}
