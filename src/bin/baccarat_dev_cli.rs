// src/bin/baccarat_dev_cli.rs
//
// Использование: baccarat_dev_cli [ROUNDS] [SEED]
// Логи: RUST_LOG=baccarat_engine=debug

use baccarat_engine::api::{
    handle_command, Command, CommandResponse, DealCommand, ResetShoeCommand,
};
use baccarat_engine::domain::{BetMap, BetType, Chips, Grid, RoadColor, TableConfig, Winner};
use baccarat_engine::engine::BaccaratTable;
use baccarat_engine::infra::{InMemoryBalanceStore, InMemoryHistoryStore, RngSeed};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let rounds: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(40);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2024);

    println!("=== BACCARAT DEV CLI === rounds={rounds} seed={seed}\n");

    let config = TableConfig::default();
    let rng = RngSeed::from_u64(seed).derive(1, 0).to_rng();
    let balance = InMemoryBalanceStore::new(config.starting_balance);

    let mut table = match BaccaratTable::new(config, rng, InMemoryHistoryStore::new(), balance) {
        Ok(t) => t,
        Err(err) => {
            eprintln!("Не удалось открыть стол: {err}");
            return;
        }
    };

    // Простая стратегия: 100 на банкира (каждый третий раунд — на игрока) и 10 на ничью.
    for i in 0..rounds {
        let main = if i % 3 == 0 { BetType::Player } else { BetType::Banker };
        let bets = BetMap::new()
            .with(main, Chips(100))
            .with(BetType::Tie, Chips(10));

        match handle_command(&mut table, Command::Deal(DealCommand { bets })) {
            Ok(CommandResponse::State(state)) => {
                if let Some(round) = state.current_round.result.as_ref() {
                    println!(
                        "#{:>3} P {} [{}]  B {} [{}]  → {:<22} Δ={:>5}  balance={}",
                        state.current_round.round_id.unwrap_or_default(),
                        round.player.score,
                        cards_str(&round.player.cards),
                        round.banker.score,
                        cards_str(&round.banker.cards),
                        round.outcome,
                        state.current_round.balance_delta.unwrap_or_default(),
                        state.user.balance,
                    );
                }
            }
            Ok(other) => println!("Неожиданный ответ: {other:?}"),
            Err(err) => {
                println!("Раунд отклонён: {err:?}");
                break;
            }
        }
    }

    let roads = table.roadmaps();

    println!("\nBead Plate:");
    print_grid(&roads.bead_plate, |c| winner_char(c.winner));

    println!("\nBig Road (ничьи до начала: {}):", roads.leading_ties);
    print_grid(&roads.big_road, |c| {
        if c.ties > 0 {
            winner_char(c.winner()).to_ascii_lowercase()
        } else {
            winner_char(c.winner())
        }
    });

    for (name, road) in [
        ("Big Eye Boy", &roads.big_eye_boy),
        ("Small Road", &roads.small_road),
        ("Cockroach Road", &roads.cockroach_road),
    ] {
        println!("\n{name} ({} маркеров):", road.markers.len());
        print_grid(&road.grid, |m| match m {
            RoadColor::Red => 'R',
            RoadColor::Blue => 'b',
        });
    }

    match handle_command(&mut table, Command::ResetShoe(ResetShoeCommand { decks: Some(6) })) {
        Ok(CommandResponse::State(state)) => println!(
            "\nНовый шуз id={} decks={} cards={}",
            state.shoe.shoe_id, state.shoe.decks, state.shoe.remaining_cards
        ),
        Ok(_) => {}
        Err(err) => println!("Сброс шуза не удался: {err:?}"),
    }

    println!("\n=== BACCARAT DEV CLI DONE ===");
}

fn winner_char(w: Winner) -> char {
    match w {
        Winner::Player => 'P',
        Winner::Banker => 'B',
        Winner::Tie => 'T',
    }
}

fn cards_str(cards: &[baccarat_engine::api::CardDto]) -> String {
    cards
        .iter()
        .map(|c| format!("{}{}", c.rank, c.suit))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Печать сетки построчно (сетка хранится по колонкам).
fn print_grid<T>(grid: &Grid<T>, render: impl Fn(&T) -> char) {
    let rows = grid.first().map_or(0, Vec::len);
    for row in 0..rows {
        let line: String = grid
            .iter()
            .map(|col| col[row].as_ref().map_or('.', &render))
            .collect();
        println!("  {line}");
    }
}
