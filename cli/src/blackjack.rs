use std::io::{BufRead, Write};

use anyhow::Context;
use parlor_core::blackjack::*;
use parlor_core::ledger::PlayerLedger;

use crate::command::{BLACKJACK_HELP, BlackjackCommand};

fn render_hand(hand: &HandView) -> String {
    let cards: Vec<String> = hand
        .cards
        .iter()
        .map(|card| match card {
            CardView::FaceUp(card) => card.to_string(),
            CardView::FaceDown => "??".to_owned(),
        })
        .collect();
    format!("{} ({})", cards.join(" "), hand.value)
}

pub fn render_table(view: &TableView) -> String {
    let mut out = String::new();
    if !view.dealer.cards.is_empty() {
        out.push_str(&format!("dealer: {}\n", render_hand(&view.dealer)));
        out.push_str(&format!("you:    {}\n", render_hand(&view.player)));
    }
    if let Some(outcome) = view.last_outcome {
        out.push_str(&format!("{}\n", outcome.describe()));
    }
    let bet = view
        .bet
        .map_or_else(|| "none".to_owned(), |bet| bet.to_string());
    out.push_str(&format!(
        "chips: {}  bet: {}  hands won: {}  shoe: {}",
        view.bankroll.total_chips, bet, view.bankroll.hands_won, view.cards_remaining
    ));
    out
}

/// Plays until `quit` or end of input. The bankroll is recorded whenever it
/// changes and once more on the way out.
pub fn run<L, R, W>(
    table: &mut BlackjackTable,
    ledger: &mut L,
    player: &str,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    L: PlayerLedger + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", render_table(&table.view()))?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }

        match line.parse::<BlackjackCommand>() {
            Ok(BlackjackCommand::Quit) => break,
            Ok(command) => {
                let before = table.bankroll();
                if let Err(err) = apply(table, command, out) {
                    writeln!(out, "{err}")?;
                }
                // settled rounds and purchases are recorded right away
                if table.bankroll() != before
                    && let Err(err) = save(ledger, player, table.bankroll())
                {
                    log::warn!("{err:#}");
                    writeln!(out, "{err:#}")?;
                }
                if table.poll_reshuffle_signal() {
                    writeln!(out, "The shoe was reshuffled.")?;
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    let bankroll = table.bankroll();
    save(ledger, player, bankroll)?;
    writeln!(
        out,
        "\n{player} leaves with {} chips after {} winning hands.",
        bankroll.total_chips, bankroll.hands_won
    )?;
    Ok(())
}

fn save<L: PlayerLedger + ?Sized>(
    ledger: &mut L,
    player: &str,
    bankroll: Bankroll,
) -> anyhow::Result<()> {
    ledger
        .save(player, &bankroll)
        .with_context(|| format!("Could not save player {player}"))
}

fn apply<W: Write>(
    table: &mut BlackjackTable,
    command: BlackjackCommand,
    out: &mut W,
) -> anyhow::Result<()> {
    use BlackjackCommand::*;

    match command {
        Bet(amount) => {
            table.place_bet(amount)?;
            writeln!(out, "Betting {amount}.")?;
        }
        Max => {
            let amount = table.max_bet()?;
            writeln!(out, "Betting everything: {amount}.")?;
        }
        Deal => {
            table.start_round()?;
            writeln!(out, "{}", render_table(&table.view()))?;
        }
        Hit => {
            let hit = table.hit()?;
            writeln!(out, "You draw {}.", hit.card.long_name())?;
            writeln!(out, "{}", render_table(&table.view()))?;
        }
        Stand => {
            table.stand()?;
            writeln!(out, "{}", render_table(&table.view()))?;
        }
        Buy(color) => {
            table.buy_chips(color)?;
            writeln!(out, "Bought a {:?} chip worth {}.", color, color.value())?;
        }
        Status => writeln!(out, "{}", render_table(&table.view()))?,
        Help => writeln!(out, "{BLACKJACK_HELP}")?,
        Quit => {}
    }
    Ok(())
}
