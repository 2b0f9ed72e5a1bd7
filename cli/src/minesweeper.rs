use std::io::{BufRead, Write};

use parlor_core::minesweeper::*;

use crate::command::{MINESWEEPER_HELP, MinesweeperCommand};

const fn square_char(view: SquareView) -> char {
    match view {
        SquareView::Hidden => '#',
        SquareView::Flagged => 'F',
        SquareView::QuestionMarked => '?',
        SquareView::Revealed(0) => '.',
        SquareView::Revealed(n) => (b'0' + n) as char,
        SquareView::Mine => '*',
        SquareView::TriggeredMine => 'X',
    }
}

/// Grid with row and column numbers, plus the counter and timer line.
pub fn render_board<G: MineGenerator>(game: &Minesweeper<G>) -> String {
    let (rows, cols) = game.size();
    let mut out = String::from("    ");
    for col in 0..cols {
        out.push_str(&format!("{:>3}", col));
    }
    out.push('\n');

    for row in 0..rows {
        out.push_str(&format!("{:>3} ", row));
        for col in 0..cols {
            out.push_str(&format!("{:>3}", square_char(game.square_view((row, col)))));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "mines left: {}  time: {:03}",
        game.mines_left(),
        game.elapsed_secs()
    ));
    out
}

pub fn run<G, R, W>(game: &mut Minesweeper<G>, input: R, out: &mut W) -> anyhow::Result<()>
where
    G: MineGenerator,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", render_board(game))?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }

        match line.parse::<MinesweeperCommand>() {
            Ok(MinesweeperCommand::Quit) => break,
            Ok(MinesweeperCommand::Help) => writeln!(out, "{MINESWEEPER_HELP}")?,
            Ok(MinesweeperCommand::New) => {
                game.start_new_game();
                writeln!(out, "{}", render_board(game))?;
            }
            Ok(MinesweeperCommand::Reveal(coords)) => match game.left_click(coords) {
                Ok(outcome) => {
                    if outcome.has_update() {
                        writeln!(out, "{}", render_board(game))?;
                    }
                    report_end(game, out)?;
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            Ok(MinesweeperCommand::Flag(coords)) => match game.right_click(coords) {
                Ok(outcome) => {
                    if outcome.has_update() {
                        writeln!(out, "{}", render_board(game))?;
                    }
                    report_end(game, out)?;
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            Err(err) => writeln!(out, "{err}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

fn report_end<G, W>(game: &Minesweeper<G>, out: &mut W) -> anyhow::Result<()>
where
    G: MineGenerator,
    W: Write,
{
    match game.state() {
        EngineState::Won => writeln!(
            out,
            "You win in {} seconds! Type `new` to play again.",
            game.elapsed_secs()
        )?,
        EngineState::Lost => writeln!(out, "Boom. Type `new` to play again.")?,
        EngineState::Ready | EngineState::Active => {}
    }
    Ok(())
}
