use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use parlor_core::blackjack::{Bankroll, BlackjackTable, RoundStart, Shoe, TablePhase};
use parlor_core::minesweeper::{Board, BoardConfig, Minesweeper, reveal_square};

fn expert_first_click(c: &mut Criterion) {
    c.bench_function("expert_first_click", |b| {
        let mut seed = 0;
        b.iter_batched(
            || {
                seed += 1;
                Minesweeper::with_seed(BoardConfig::EXPERT, seed).unwrap()
            },
            |mut game| black_box(game.left_click((8, 15)).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

fn empty_board_cascade(c: &mut Criterion) {
    let board = Board::new(BoardConfig::new_unchecked(255, 255, 0)).unwrap();

    c.bench_function("empty_board_cascade", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| black_box(reveal_square(&mut board, (127, 127))),
            BatchSize::LargeInput,
        )
    });
}

fn blackjack_rounds(c: &mut Criterion) {
    c.bench_function("blackjack_100_rounds", |b| {
        b.iter(|| {
            let bankroll = Bankroll::with_chips(1_000_000);
            let mut table = BlackjackTable::new(Shoe::with_seed(4, 1), bankroll);
            table.place_bet(1).unwrap();
            for _ in 0..100 {
                if table.start_round().unwrap() == RoundStart::PlayerTurn {
                    while table.player_hand().value() < 17
                        && table.hit().unwrap().outcome.is_none()
                    {}
                    if table.phase() == TablePhase::PlayerTurn {
                        table.stand().unwrap();
                    }
                }
            }
            black_box(table.bankroll())
        })
    });
}

criterion_group!(benches, expert_first_click, empty_board_cascade, blackjack_rounds);
criterion_main!(benches);
