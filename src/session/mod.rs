//! The battle session: one explicitly owned state container per duel.
//!
//! ## Flow
//!
//! 1. `load_roster` fills the available pool.
//! 2. `assign_to_roster` / `unassign_from_roster` build both decks.
//! 3. `start_match` shuffles and opens round 1.
//! 4. Each round: `draw_phase`, then `resolve_battle` once both hands are
//!    ready. The match ends when a deck runs dry or someone surrenders.
//! 5. `reset_match` pools every card again.
//!
//! Commands take `&mut self` and run to completion; queries derive
//! everything on read.

pub mod snapshot;

use log::{debug, info, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

use crate::cards::{Alignment, Character, CharacterId, PowerStat, RosterFilter};
use crate::core::{
    EngineError, GameMode, GameRng, MatchConfig, MatchPhase, MatchStatus, Participant, Side,
};
use crate::history::{GameHistory, GameStats, RoundRecord};
use crate::policy::{CounterOrStrongest, OpponentPolicy, PolicyView};
use crate::rules::{compare, settle, BattleResult};
use crate::zones::{CardTable, Location};

pub use snapshot::SessionSnapshot;

/// The two cards currently facing off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentBattle<'a> {
    pub player1_card: Option<&'a Character>,
    pub player2_card: Option<&'a Character>,
    pub round: u32,
}

/// A duel between player1 and a second player or the computer.
///
/// ## Example
///
/// ```
/// use hero_duel::cards::{Character, CharacterId, PowerStats};
/// use hero_duel::core::{MatchConfig, Participant};
/// use hero_duel::session::BattleSession;
///
/// let mut session = BattleSession::new(MatchConfig::new().with_seed(1));
/// session.load_roster(vec![
///     Character::new(CharacterId::new(1), "Thor", PowerStats::uniform(80)),
///     Character::new(CharacterId::new(2), "Loki", PowerStats::uniform(60)),
/// ]);
///
/// session.assign_to_roster(CharacterId::new(1), Participant::Player1).unwrap();
/// session.assign_to_roster(CharacterId::new(2), Participant::Player2).unwrap();
/// session.start_match().unwrap();
///
/// assert!(session.draw_phase().unwrap());
/// let result = session.resolve_battle().unwrap();
///
/// assert_eq!(result.winning_value, 480);
/// assert!(session.is_over());
/// assert_eq!(session.winner(), Some(Participant::Player1));
/// ```
#[derive(Clone, Debug)]
pub struct BattleSession<P: OpponentPolicy = CounterOrStrongest> {
    status: MatchStatus,
    table: CardTable,
    history: GameHistory,
    filter: RosterFilter,
    rng: GameRng,
    policy: P,
}

impl BattleSession<CounterOrStrongest> {
    /// Create a session with the default computer policy.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self::with_policy(config, CounterOrStrongest)
    }
}

impl Default for BattleSession<CounterOrStrongest> {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl<P: OpponentPolicy> BattleSession<P> {
    /// Create a session with a custom computer policy.
    #[must_use]
    pub fn with_policy(config: MatchConfig, policy: P) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_random_seed(),
        };
        debug!("new session, mode {:?}, seed {}", config.mode, rng.seed());

        Self {
            status: MatchStatus::new(config.mode),
            table: CardTable::new(),
            history: GameHistory::new(),
            filter: RosterFilter::default(),
            rng,
            policy,
        }
    }

    // =========================================================================
    // Roster
    // =========================================================================

    /// Replace every card in the session with `characters` and reset.
    ///
    /// Characters go to the pool in input order. A repeated id keeps its
    /// first occurrence.
    pub fn load_roster(&mut self, characters: impl IntoIterator<Item = Character>) {
        let mut seen = FxHashSet::default();
        let mut pool = Vec::new();

        for character in characters {
            if seen.insert(character.id) {
                pool.push(character);
            } else {
                warn!("duplicate {} ({}) dropped from roster", character.id, character.name);
            }
        }

        info!("roster loaded with {} characters", pool.len());
        self.table.replace_all(pool);
        self.status.reset();
        self.history.clear();
    }

    /// Switch between pvp and pvc. Resets the match.
    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.status.mode = mode;
        self.reset_match();
    }

    /// Set the view used by [`filtered_available`](Self::filtered_available).
    pub fn set_roster_filter(&mut self, filter: RosterFilter) {
        self.filter = filter;
    }

    /// Show only one alignment, or every alignment with `None`.
    pub fn set_alignment_filter(&mut self, alignment: Option<Alignment>) {
        self.filter.alignment = alignment;
    }

    /// Order the filtered pool by a statistic, or keep pool order with `None`.
    pub fn set_stat_filter(&mut self, stat: Option<PowerStat>) {
        self.filter.sort_by = stat;
    }

    /// Move a character from the pool to the end of a participant's deck.
    ///
    /// In pvp the pick then passes to the other human.
    pub fn assign_to_roster(&mut self, id: CharacterId, who: Participant) -> Result<(), EngineError> {
        if self.status.started {
            return Err(EngineError::MatchAlreadyStarted);
        }

        let side = who.side();
        if self.table.deck_contains(side, id) {
            return Err(EngineError::AlreadyInDeck(id));
        }

        let card = self
            .table
            .take_from_pool(id)
            .ok_or(EngineError::NotAvailable(id))?;
        debug!("{} picks {}", who, card.name);
        self.table.push_to_deck(side, card);
        self.status.pass_pick(who);

        Ok(())
    }

    /// Move a character from a participant's deck back to the pool.
    pub fn unassign_from_roster(&mut self, id: CharacterId, who: Participant) -> Result<(), EngineError> {
        if self.status.started {
            return Err(EngineError::MatchAlreadyStarted);
        }

        let card = self
            .table
            .remove_from_deck(who.side(), id)
            .ok_or(EngineError::NotInDeck(id))?;
        debug!("{} returns {}", who, card.name);
        self.table.return_to_pool(card);

        Ok(())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Shuffle both decks and open round 1.
    ///
    /// Player1 always needs a card; player2 needs one in pvp. In pvc the
    /// opponent seat's shuffled deck becomes the computer's deck.
    ///
    /// A finished match reports `MatchOver`; a rematch needs
    /// [`reset_match`](Self::reset_match) first.
    pub fn start_match(&mut self) -> Result<(), EngineError> {
        match self.status.phase() {
            MatchPhase::Over => return Err(EngineError::MatchOver),
            MatchPhase::InProgress => return Err(EngineError::MatchAlreadyStarted),
            MatchPhase::NotStarted => {}
        }
        if self.table.deck_size(Side::Player1) == 0 {
            return Err(EngineError::EmptyDeck(Participant::Player1));
        }
        if self.status.mode == GameMode::Pvp && self.table.deck_size(Side::Opponent) == 0 {
            return Err(EngineError::EmptyDeck(Participant::Player2));
        }

        for side in Side::ALL {
            self.table.shuffle_deck(side, &mut self.rng);
        }

        self.status.begin();
        self.history.clear();

        info!(
            "match started ({:?}): player1 {} cards, {} {} cards",
            self.status.mode,
            self.table.deck_size(Side::Player1),
            self.status.mode.opponent(),
            self.table.deck_size(Side::Opponent)
        );
        Ok(())
    }

    /// Pool every card and return to the pre-start state.
    ///
    /// Safe at any time; a second call changes nothing.
    pub fn reset_match(&mut self) {
        self.table.gather_into_pool();
        self.status.reset();
        self.history.clear();
        debug!("match reset, {} characters available", self.table.pool().len());
    }

    // =========================================================================
    // Turn sequencing
    // =========================================================================

    /// Draw for both sides.
    ///
    /// Returns `Ok(true)` when both hands hold a card and the battle can be
    /// resolved. A hand left over from an unresolved draw is kept as is.
    pub fn draw_phase(&mut self) -> Result<bool, EngineError> {
        self.ensure_in_progress()?;

        let player1_ready = self.table.draw_front(Side::Player1);
        let opponent_ready = match self.status.mode {
            GameMode::Pvp => self.table.draw_front(Side::Opponent),
            GameMode::Pvc => self.computer_draw(),
        };

        debug!(
            "round {} draw: player1 {:?}, {} {:?}",
            self.status.current_round,
            self.table.hand(Side::Player1).map(|c| &c.name),
            self.status.mode.opponent(),
            self.table.hand(Side::Opponent).map(|c| &c.name)
        );

        Ok(player1_ready && opponent_ready)
    }

    fn computer_draw(&mut self) -> bool {
        if self.table.hand(Side::Opponent).is_some() {
            return true;
        }

        let view = PolicyView {
            history: &self.history,
            rival_hand: self.table.hand(Side::Player1),
        };
        match self.policy.choose(self.table.deck(Side::Opponent), &view) {
            Some(index) => self.table.draw_at(Side::Opponent, index),
            None => false,
        }
    }

    // =========================================================================
    // Battle
    // =========================================================================

    /// Resolve the battle between the two hands.
    ///
    /// Settles the cards, records the round, clears both hands, checks for
    /// game over and otherwise advances the round.
    pub fn resolve_battle(&mut self) -> Result<BattleResult, EngineError> {
        self.ensure_in_progress()?;

        let mode = self.status.mode;
        let (player1_card, opponent_card) = self
            .table
            .take_hands()
            .map_err(|side| EngineError::MissingHand(mode.participant(side)))?;

        let result = compare(&player1_card.powerstats, &opponent_card.powerstats, mode);
        let record = RoundRecord {
            round: self.status.current_round,
            player1_card: player1_card.clone(),
            player2_card: opponent_card.clone(),
            result: result.clone(),
        };

        settle(&mut self.table, player1_card, opponent_card, &result.winner);
        self.history.record(record);

        info!(
            "round {}: {:?} on {} ({} points)",
            self.status.current_round, result.winner, result.winning_stat, result.winning_value
        );

        self.check_game_over();
        if !self.status.over {
            self.status.advance_round();
        }

        Ok(result)
    }

    fn check_game_over(&mut self) {
        let winner = if self.table.deck_size(Side::Player1) == 0 {
            Some(self.status.mode.opponent())
        } else if self.table.deck_size(Side::Opponent) == 0 {
            Some(Participant::Player1)
        } else {
            None
        };

        if let Some(winner) = winner {
            self.declare_winner(winner);
        }
    }

    /// Concede the match. The other side wins immediately.
    ///
    /// Returns the declared winner, or `None` if the match has not started.
    /// No round is recorded and no card moves.
    pub fn surrender(&mut self, who: Participant) -> Option<Participant> {
        if !self.status.started {
            return None;
        }

        let winner = who.rival(self.status.mode);
        info!("{} surrenders", who);
        self.declare_winner(winner);
        Some(winner)
    }

    fn declare_winner(&mut self, winner: Participant) {
        self.status.finish(winner);
        self.history.winner = Some(winner);
        info!("game over after round {}: {} wins", self.status.current_round, winner);
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        if self.status.in_progress() {
            Ok(())
        } else if self.status.over {
            Err(EngineError::MatchOver)
        } else {
            Err(EngineError::MatchNotStarted)
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn status(&self) -> &MatchStatus {
        &self.status
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.status.mode
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.status.phase()
    }

    #[must_use]
    pub fn current_round(&self) -> u32 {
        self.status.current_round
    }

    #[must_use]
    pub fn current_turn(&self) -> Participant {
        self.status.current_turn
    }

    #[must_use]
    pub fn winner(&self) -> Option<Participant> {
        self.status.winner
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.status.started
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.over
    }

    /// The available pool in pool order.
    #[must_use]
    pub fn available(&self) -> &[Character] {
        self.table.pool()
    }

    /// The available pool through the current roster filter.
    #[must_use]
    pub fn filtered_available(&self) -> Vec<&Character> {
        self.filter.apply(self.table.pool())
    }

    #[must_use]
    pub fn roster_filter(&self) -> &RosterFilter {
        &self.filter
    }

    /// Number of characters in the available pool.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.table.pool().len()
    }

    /// A seat's deck, front first.
    #[must_use]
    pub fn deck(&self, side: Side) -> &VecDeque<Character> {
        self.table.deck(side)
    }

    #[must_use]
    pub fn deck_size(&self, side: Side) -> usize {
        self.table.deck_size(side)
    }

    /// Player1's deck size.
    #[must_use]
    pub fn player1_score(&self) -> usize {
        self.table.deck_size(Side::Player1)
    }

    /// Deck size of player2 or the computer.
    #[must_use]
    pub fn player2_score(&self) -> usize {
        self.table.deck_size(Side::Opponent)
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> Option<&Character> {
        self.table.hand(side)
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Character] {
        self.table.discard()
    }

    #[must_use]
    pub fn current_battle(&self) -> CurrentBattle<'_> {
        CurrentBattle {
            player1_card: self.table.hand(Side::Player1),
            player2_card: self.table.hand(Side::Opponent),
            round: self.status.current_round,
        }
    }

    #[must_use]
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Win/draw tallies derived from the ledger.
    #[must_use]
    pub fn game_stats(&self) -> GameStats {
        GameStats::from_history(&self.history, self.status.mode)
    }

    /// Where a character currently is.
    #[must_use]
    pub fn locate(&self, id: CharacterId) -> Option<Location> {
        self.table.locate(id)
    }

    /// Count of each character id across every location.
    #[must_use]
    pub fn census(&self) -> FxHashMap<CharacterId, usize> {
        self.table.census()
    }

    #[must_use]
    pub fn table(&self) -> &CardTable {
        &self.table
    }

    /// Serializable summary of the session.
    #[must_use]
    pub fn export_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status.clone(),
            player1_score: self.player1_score(),
            player2_score: self.player2_score(),
            game_stats: self.game_stats(),
            game_history: self.history.clone(),
        }
    }
}
