use serde::{Deserialize, Serialize};

use super::*;
use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlackjackConfig {
    pub decks: u8,
    /// Chips given to a player the ledger has never seen.
    pub starting_chips: u64,
    pub seed: Option<u64>,
}

impl BlackjackConfig {
    pub fn new_shoe(&self) -> Shoe {
        match self.seed {
            Some(seed) => Shoe::with_seed(self.decks, seed),
            None => Shoe::new(self.decks),
        }
    }

    pub fn fresh_bankroll(&self) -> Bankroll {
        Bankroll::with_chips(self.starting_chips)
    }
}

impl Default for BlackjackConfig {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            starting_chips: STARTING_CHIPS,
            seed: None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TablePhase {
    Betting,
    PlayerTurn,
    RoundOver,
}

/// What `start_round` led to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundStart {
    PlayerTurn,
    /// A natural 21 settled the round on the deal.
    Resolved(RoundOutcome),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HitResult {
    pub card: Card,
    pub value: u8,
    /// Set when the card busted the hand.
    pub outcome: Option<RoundOutcome>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardView {
    FaceUp(Card),
    FaceDown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandView {
    pub cards: Vec<CardView>,
    /// Total of the face-up cards.
    pub value: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub phase: TablePhase,
    pub player: HandView,
    pub dealer: HandView,
    pub bet: Option<u64>,
    pub bankroll: Bankroll,
    pub last_outcome: Option<RoundOutcome>,
    pub cards_remaining: usize,
}

/// One player against the dealer, with an owned shoe and the player's bankroll.
#[derive(Clone, Debug)]
pub struct BlackjackTable {
    shoe: Shoe,
    player: Hand,
    dealer: Dealer,
    bankroll: Bankroll,
    bet: Option<u64>,
    phase: TablePhase,
    last_outcome: Option<RoundOutcome>,
}

impl BlackjackTable {
    pub fn new(shoe: Shoe, bankroll: Bankroll) -> Self {
        Self {
            shoe,
            player: Hand::new(),
            dealer: Dealer::new(),
            bankroll,
            bet: None,
            phase: TablePhase::Betting,
            last_outcome: None,
        }
    }

    pub fn from_config(config: &BlackjackConfig, bankroll: Bankroll) -> Self {
        Self::new(config.new_shoe(), bankroll)
    }

    pub fn phase(&self) -> TablePhase {
        self.phase
    }

    pub fn bankroll(&self) -> Bankroll {
        self.bankroll
    }

    pub fn bet(&self) -> Option<u64> {
        self.bet
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn poll_reshuffle_signal(&mut self) -> bool {
        self.shoe.poll_reshuffle_signal()
    }

    /// Stakes `amount` on the next round. The bet stays up for later rounds
    /// until replaced.
    pub fn place_bet(&mut self, amount: u64) -> Result<()> {
        self.check_between_rounds()?;
        if amount == 0 || amount > self.bankroll.total_chips {
            return Err(GameError::InvalidBet);
        }
        self.bet = Some(amount);
        self.phase = TablePhase::Betting;
        Ok(())
    }

    /// Bets every chip on hand.
    pub fn max_bet(&mut self) -> Result<u64> {
        self.check_between_rounds()?;
        let chips = self.bankroll.total_chips;
        if chips == 0 {
            return Err(GameError::InsufficientChips);
        }
        self.place_bet(chips)?;
        Ok(chips)
    }

    pub fn buy_chips(&mut self, color: ChipColor) -> Result<()> {
        self.check_between_rounds()?;
        self.bankroll.buy_chips(color);
        Ok(())
    }

    /// Deals a new round against the standing bet.
    pub fn start_round(&mut self) -> Result<RoundStart> {
        self.check_between_rounds()?;
        let bet = self.bet.ok_or(GameError::NoBet)?;
        if bet > self.bankroll.total_chips {
            return Err(GameError::InsufficientChips);
        }

        log::debug!("Round starts, bet {}", bet);
        self.last_outcome = None;
        deal_initial_hands(&mut self.player, &mut self.dealer, &mut self.shoe);

        if let Some(outcome) = resolve_naturals(&self.player, self.dealer.hand()) {
            self.dealer.reveal_hole();
            self.finish_round(outcome, bet);
            return Ok(RoundStart::Resolved(outcome));
        }

        self.phase = TablePhase::PlayerTurn;
        Ok(RoundStart::PlayerTurn)
    }

    pub fn hit(&mut self) -> Result<HitResult> {
        let bet = self.check_player_turn()?;
        let card = self.player.draw_from(&mut self.shoe);
        let value = self.player.value();
        log::debug!("Player draws {}, now {}", card, value);

        let outcome = self.player.is_bust().then_some(RoundOutcome::Busted);
        if let Some(outcome) = outcome {
            self.dealer.reveal_hole();
            self.finish_round(outcome, bet);
        }
        Ok(HitResult {
            card,
            value,
            outcome,
        })
    }

    /// Ends the player's turn; the dealer plays out and the round settles.
    pub fn stand(&mut self) -> Result<RoundOutcome> {
        let bet = self.check_player_turn()?;
        let dealer = self.dealer.play_turn(&mut self.shoe);
        let outcome = compare_hands(self.player.value(), dealer);
        self.finish_round(outcome, bet);
        Ok(outcome)
    }

    pub fn view(&self) -> TableView {
        let player = HandView {
            cards: self.player.cards().iter().copied().map(CardView::FaceUp).collect(),
            value: self.player.value(),
        };

        let dealer_cards = self.dealer.hand().cards();
        let dealer = if self.dealer.hole_revealed() {
            HandView {
                cards: dealer_cards.iter().copied().map(CardView::FaceUp).collect(),
                value: self.dealer.hand().value(),
            }
        } else {
            let shown = dealer_cards.get(..1).unwrap_or(dealer_cards);
            HandView {
                cards: dealer_cards
                    .iter()
                    .enumerate()
                    .map(|(i, &card)| match i {
                        1 => CardView::FaceDown,
                        _ => CardView::FaceUp(card),
                    })
                    .collect(),
                value: hand_value(shown),
            }
        };

        TableView {
            phase: self.phase,
            player,
            dealer,
            bet: self.bet,
            bankroll: self.bankroll,
            last_outcome: self.last_outcome,
            cards_remaining: self.shoe.remaining(),
        }
    }

    fn finish_round(&mut self, outcome: RoundOutcome, bet: u64) {
        self.bankroll.settle(outcome, bet);
        self.last_outcome = Some(outcome);
        self.phase = TablePhase::RoundOver;
        log::info!(
            "Round over: {:?}, player {} vs dealer {}, chips {}",
            outcome,
            self.player.value(),
            self.dealer.hand().value(),
            self.bankroll.total_chips
        );
    }

    fn check_between_rounds(&self) -> Result<()> {
        match self.phase {
            TablePhase::PlayerTurn => Err(GameError::RoundInProgress),
            TablePhase::Betting | TablePhase::RoundOver => Ok(()),
        }
    }

    /// The bet is always set once a round is under way.
    fn check_player_turn(&self) -> Result<u64> {
        match (self.phase, self.bet) {
            (TablePhase::PlayerTurn, Some(bet)) => Ok(bet),
            _ => Err(GameError::NotPlayerTurn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(text: &str) -> Vec<Card> {
        text.split_whitespace()
            .map(|card| card.parse().unwrap())
            .collect()
    }

    /// Table whose shoe deals `order` first: player, dealer, player, dealer, then hits.
    fn table(order: &str) -> BlackjackTable {
        BlackjackTable::new(Shoe::stacked(4, 1, &cards(order)), Bankroll::default())
    }

    #[test]
    fn bets_are_validated() {
        let mut table = table("");
        assert_eq!(table.place_bet(0), Err(GameError::InvalidBet));
        assert_eq!(table.place_bet(101), Err(GameError::InvalidBet));
        assert_eq!(table.start_round(), Err(GameError::NoBet));
        assert_eq!(table.place_bet(100), Ok(()));
        assert_eq!(table.bet(), Some(100));
    }

    #[test]
    fn max_bet_stakes_everything() {
        let mut table = table("");
        assert_eq!(table.max_bet(), Ok(100));

        let mut broke = BlackjackTable::new(Shoe::with_seed(1, 0), Bankroll::with_chips(0));
        assert_eq!(broke.max_bet(), Err(GameError::InsufficientChips));
    }

    #[test]
    fn player_natural_pays_three_to_two() {
        let mut table = table("Ah 9c Kd 7c");
        table.place_bet(10).unwrap();

        assert_eq!(
            table.start_round(),
            Ok(RoundStart::Resolved(RoundOutcome::BlackjackWin))
        );
        assert_eq!(table.phase(), TablePhase::RoundOver);
        assert_eq!(table.bankroll(), Bankroll::new(1, 115));
        assert!(table.dealer().hole_revealed());
        // the dealer never draws on a natural
        assert_eq!(table.dealer().hand().len(), 2);
    }

    #[test]
    fn dealer_natural_takes_the_bet() {
        let mut table = table("9h Ac Kd Qc");
        table.place_bet(10).unwrap();

        assert_eq!(
            table.start_round(),
            Ok(RoundStart::Resolved(RoundOutcome::DealerBlackjack))
        );
        assert_eq!(table.bankroll(), Bankroll::new(0, 90));
    }

    #[test]
    fn double_natural_pushes() {
        let mut table = table("Ah Ac Kd Qc");
        table.place_bet(10).unwrap();

        assert_eq!(
            table.start_round(),
            Ok(RoundStart::Resolved(RoundOutcome::BlackjackPush))
        );
        assert_eq!(table.bankroll(), Bankroll::default());
    }

    #[test]
    fn bust_ends_round_without_dealer_play() {
        let mut table = table("Th 6c 5d 9c 9s");
        table.place_bet(20).unwrap();
        assert_eq!(table.start_round(), Ok(RoundStart::PlayerTurn));

        let hit = table.hit().unwrap();
        assert_eq!(hit.value, 24);
        assert_eq!(hit.outcome, Some(RoundOutcome::Busted));
        assert_eq!(table.dealer().hand().len(), 2);
        assert_eq!(table.bankroll(), Bankroll::new(0, 80));
        assert_eq!(table.hit(), Err(GameError::NotPlayerTurn));
    }

    #[test]
    fn stand_lets_dealer_play_out() {
        // player 19, dealer 16 draws a 9 and busts
        let mut table = table("Th 6c 9d Tc 9s");
        table.place_bet(10).unwrap();
        table.start_round().unwrap();

        assert_eq!(table.stand(), Ok(RoundOutcome::Win));
        assert_eq!(table.dealer().hand().len(), 3);
        assert_eq!(table.bankroll(), Bankroll::new(1, 110));
    }

    #[test]
    fn higher_dealer_total_wins() {
        let mut table = table("Th 9c 7d Tc");
        table.place_bet(10).unwrap();
        table.start_round().unwrap();

        assert_eq!(table.stand(), Ok(RoundOutcome::Lose));
        assert_eq!(table.bankroll().total_chips, 90);
    }

    #[test]
    fn equal_totals_push() {
        let mut table = table("Th 9c 9d Tc");
        table.place_bet(10).unwrap();
        table.start_round().unwrap();

        assert_eq!(table.stand(), Ok(RoundOutcome::Push));
        assert_eq!(table.bankroll(), Bankroll::default());
    }

    #[test]
    fn actions_outside_their_phase_are_rejected() {
        let mut table = table("Th 9c 8d Tc");
        assert_eq!(table.hit(), Err(GameError::NotPlayerTurn));
        assert_eq!(table.stand(), Err(GameError::NotPlayerTurn));

        table.place_bet(10).unwrap();
        table.start_round().unwrap();
        assert_eq!(table.place_bet(5), Err(GameError::RoundInProgress));
        assert_eq!(table.start_round(), Err(GameError::RoundInProgress));
        assert_eq!(table.buy_chips(ChipColor::Red), Err(GameError::RoundInProgress));
        assert_eq!(table.bet(), Some(10));
        assert_eq!(table.phase(), TablePhase::PlayerTurn);
    }

    #[test]
    fn standing_bet_must_still_fit() {
        let mut table = BlackjackTable::new(
            Shoe::stacked(4, 1, &cards("Th 9c 7d Tc")),
            Bankroll::with_chips(10),
        );
        table.max_bet().unwrap();
        table.start_round().unwrap();
        table.stand().unwrap();

        assert_eq!(table.bankroll().total_chips, 0);
        assert_eq!(table.start_round(), Err(GameError::InsufficientChips));

        table.buy_chips(ChipColor::Black).unwrap();
        assert!(table.start_round().is_ok());
    }

    #[test]
    fn view_hides_the_hole_card_until_revealed() {
        let mut table = table("Th 6c 9d Tc 9s");
        table.place_bet(10).unwrap();
        table.start_round().unwrap();

        let view = table.view();
        assert_eq!(view.phase, TablePhase::PlayerTurn);
        assert_eq!(view.player.value, 19);
        assert_eq!(view.dealer.cards[1], CardView::FaceDown);
        assert_eq!(view.dealer.value, 6);

        table.stand().unwrap();
        let view = table.view();
        assert!(view.dealer.cards.iter().all(|card| matches!(card, CardView::FaceUp(_))));
        assert_eq!(view.dealer.value, 25);
        assert_eq!(view.last_outcome, Some(RoundOutcome::Win));
    }

    #[test]
    fn serialized_view_does_not_leak_the_hole_card() {
        let mut table = table("Th 6c 9d Tc 9s");
        table.place_bet(10).unwrap();
        table.start_round().unwrap();

        let json = serde_json::to_string(&table.view()).unwrap();
        assert!(json.contains("FaceDown"));
        assert!(!json.contains(r#"{"rank":"Ten","suit":"Clubs"}"#));
    }

    #[test]
    fn config_defaults() {
        let config = BlackjackConfig::default();
        assert_eq!(config.decks, 4);
        assert_eq!(config.fresh_bankroll(), Bankroll::new(0, 100));

        let seeded = BlackjackConfig {
            seed: Some(5),
            ..config
        };
        assert_eq!(seeded.new_shoe().seed(), 5);
        assert_eq!(seeded.new_shoe().remaining(), 208);
    }
}
