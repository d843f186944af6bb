//! The turn engine.
//!
//! ## Turn flow
//!
//! ```text
//! AwaitingRoll -> AwaitingAction (after the automatic first roll)
//!              -> ... roll / hold / unhold ...
//!              -> TurnComplete (after a submission)
//!              -> next seat's AwaitingRoll, or GameOver
//! ```
//!
//! The game starts with seat 1 on turn 1 and its first roll already made.
//! Submitting a category is the only way the turn passes. Once any seat's
//! turn counter passes [`ROUND_LIMIT`] the game is over and every mutation
//! fails with [`KniffelError::GameOver`].
//!
//! A rejected operation never changes anything, so the game stays playable
//! after any error.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{
    Action, ActionRecord, DiceSource, GameConfig, GameRng, KniffelError, PlayerId, PlayerMap,
    MAX_PLAYERS,
};
use crate::dice::{DiceSet, DICE_COUNT};
use crate::scoring::{CategoryKind, Submission};
use crate::strategy::CategoryStrategy;

use super::player::{Player, MAX_ROLLS};
use super::result::{standings, GameResult};

/// Turns each seat plays.
pub const ROUND_LIMIT: u32 = 13;

/// Where the active seat is within its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Turn started, dice not rolled yet.
    AwaitingRoll,
    /// At least one roll made; roll, hold, unhold or submit.
    AwaitingAction,
    /// Category submitted; the turn is about to pass.
    TurnComplete,
    /// Every seat has played all its turns.
    GameOver,
}

/// A game of Kniffel for one or more seats.
///
/// Generic over the dice source so tests can script every roll. The whole
/// game, random stream included, serializes for save files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game<R = GameRng> {
    players: PlayerMap<Player>,
    active: PlayerId,
    phase: TurnPhase,
    history: Vec<ActionRecord>,
    sequence: u32,
    source: R,
}

impl Game<GameRng> {
    /// Build a game from `config`, seeding dice from the configured seed or
    /// from entropy.
    pub fn new(config: &GameConfig) -> Result<Self, KniffelError> {
        let source = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_source(config, source)
    }
}

impl<R: DiceSource> Game<R> {
    /// Build a game from `config` rolling dice from `source`.
    pub fn with_source(config: &GameConfig, source: R) -> Result<Self, KniffelError> {
        config.validate()?;

        let seats = config
            .seats
            .iter()
            .map(|seat| Player::new(seat.name.clone(), seat.kind))
            .collect();
        let players = PlayerMap::from_vec(seats).ok_or_else(|| KniffelError::InvalidConfig {
            reason: "a game needs at least one player".to_string(),
        })?;

        let mut game = Self {
            players,
            active: PlayerId::new(0),
            phase: TurnPhase::AwaitingRoll,
            history: Vec::new(),
            sequence: 0,
            source,
        };
        game.start()?;
        Ok(game)
    }

    // === Operations ===

    /// Roll the active seat's free dice.
    pub fn roll(&mut self) -> Result<[u8; DICE_COUNT], KniffelError> {
        self.ensure_running()?;
        let values = self.players[self.active].roll(&mut self.source)?;
        self.record(Action::Roll);
        self.phase = TurnPhase::AwaitingAction;
        Ok(values)
    }

    /// Hold dice of the active seat by 1-based index.
    pub fn hold(&mut self, indices: &[usize]) -> Result<(), KniffelError> {
        self.ensure_running()?;
        self.players[self.active].hold(indices)?;
        self.record(Action::hold(indices));
        Ok(())
    }

    /// Release dice of the active seat by 1-based index.
    pub fn unhold(&mut self, indices: &[usize]) -> Result<(), KniffelError> {
        self.ensure_running()?;
        self.players[self.active].unhold(indices)?;
        self.record(Action::unhold(indices));
        Ok(())
    }

    /// Submit the active seat's dice to the category with 1-based `index`
    /// and pass the turn.
    pub fn submit_and_advance(&mut self, index: usize) -> Result<Submission, KniffelError> {
        self.ensure_running()?;
        let kind = CategoryKind::from_index(index)?;
        self.submit_kind_and_advance(kind)
    }

    /// Submit the active seat's dice to `kind` and pass the turn.
    pub fn submit_kind_and_advance(
        &mut self,
        kind: CategoryKind,
    ) -> Result<Submission, KniffelError> {
        self.ensure_running()?;
        let submission = self.players[self.active].submit_kind(kind)?;
        self.record(Action::Submit(kind));
        self.phase = TurnPhase::TurnComplete;
        self.advance_turn()?;
        Ok(submission)
    }

    /// Let `strategy` choose a category for the active automated seat, then
    /// submit it and pass the turn.
    pub fn play_auto_turn<S>(&mut self, strategy: &S) -> Result<Submission, KniffelError>
    where
        S: CategoryStrategy + ?Sized,
    {
        self.ensure_running()?;
        let player = self.active_player();
        if !player.is_auto() {
            return Err(KniffelError::NotAutomated {
                name: player.name().to_string(),
            });
        }
        let kind = strategy.choose(player)?;
        self.submit_kind_and_advance(kind)
    }

    /// Play automated seats until a human is up or the game ends.
    pub fn play_auto_turns<S>(&mut self, strategy: &S) -> Result<Vec<Submission>, KniffelError>
    where
        S: CategoryStrategy + ?Sized,
    {
        let mut played = Vec::new();
        while !self.is_over() && self.active_player().is_auto() {
            played.push(self.play_auto_turn(strategy)?);
        }
        Ok(played)
    }

    /// Wipe every board and start over from seat 1, turn 1.
    ///
    /// Only while the game runs; a finished game keeps its final scores.
    /// The dice source keeps its position.
    pub fn reset(&mut self) -> Result<(), KniffelError> {
        self.ensure_running()?;
        for (_, player) in self.players.iter_mut() {
            player.reset();
        }
        self.history.clear();
        info!("game reset");
        self.start()
    }

    fn start(&mut self) -> Result<(), KniffelError> {
        self.active = PlayerId::new(0);
        self.sequence = 0;
        self.players[self.active].begin_turn();
        self.begin_turn()
    }

    /// Rotate to the next seat and count its turn; end the game once that
    /// seat has used up its turns, otherwise roll for it.
    fn advance_turn(&mut self) -> Result<(), KniffelError> {
        self.active = self.players.next_after(self.active);
        self.sequence = 0;

        self.players[self.active].begin_turn();
        let turn = self.players[self.active].turns_taken();
        if turn > ROUND_LIMIT {
            self.phase = TurnPhase::GameOver;
            info!(winners = ?self.result().map(|r| r.winners().to_vec()), "game over");
            return Ok(());
        }

        info!(player = %self.active_player().name(), turn, "turn started");
        self.begin_turn()
    }

    fn begin_turn(&mut self) -> Result<(), KniffelError> {
        self.phase = TurnPhase::AwaitingRoll;
        self.roll().map(|_| ())
    }

    fn ensure_running(&self) -> Result<(), KniffelError> {
        if self.is_over() {
            Err(KniffelError::GameOver)
        } else {
            Ok(())
        }
    }

    fn record(&mut self, action: Action) {
        let turn = self.players[self.active].turns_taken();
        let sequence = self.sequence;
        self.sequence += 1;
        self.history
            .push(ActionRecord::new(self.active, action, turn, sequence));
    }
}

impl<R> Game<R> {
    /// All seats.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// One seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Whose turn it is. After the game ends this is seat 1 again.
    #[must_use]
    pub fn active_id(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// The active seat's dice.
    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        self.active_player().dice()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    /// Current round (1..=13) from the active seat's point of view.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.active_player().turns_taken().min(ROUND_LIMIT)
    }

    /// Every successful action since the game (re)started.
    ///
    /// Holds and unholds are recorded too, so the log has no fixed length
    /// and a save grows with it.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// The dice source.
    #[must_use]
    pub fn source(&self) -> &R {
        &self.source
    }

    /// `None` while the game runs; the winners once it is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_over()
            .then(|| GameResult::from_players(&self.players))
    }

    /// Seats by total, highest first.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, u32)> {
        standings(&self.players)
    }

    /// Check what every reachable game satisfies: a seat count in range,
    /// an active seat that exists, roll and turn counters within their
    /// limits, legal dice and consistent boards.
    ///
    /// Games built through [`Game::new`] always pass. Decoded saves may
    /// not, and using one that fails can panic on the first evaluation.
    pub fn validate(&self) -> Result<(), KniffelError> {
        let invalid = |reason: String| -> Result<(), KniffelError> {
            Err(KniffelError::InvalidState { reason })
        };

        let seats = self.players.player_count();
        if seats == 0 || seats > MAX_PLAYERS {
            return invalid(format!("{seats} seats"));
        }
        if self.active.index() >= seats {
            return invalid(format!("active {} has no seat", self.active));
        }

        for (id, player) in self.players.iter() {
            if player.rolls_taken() > MAX_ROLLS {
                return invalid(format!("{id} rolled {} times", player.rolls_taken()));
            }
            if player.turns_taken() > ROUND_LIMIT + 1 {
                return invalid(format!("{id} is on turn {}", player.turns_taken()));
            }
            if !player.dice().is_valid() {
                return invalid(format!("{id} shows dice {}", player.dice()));
            }
            if !player.board().is_consistent() {
                return invalid(format!("{id} has an inconsistent board"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedDice;
    use crate::strategy::GreedyStrategy;

    fn solo(faces: Vec<u8>) -> Game<FixedDice> {
        let config = GameConfig::new().with_human("Solo");
        Game::with_source(&config, FixedDice::new(faces)).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let game = solo(vec![1, 2, 3, 4, 5]);

        assert_eq!(game.active_id(), PlayerId(0));
        assert_eq!(game.active_player().turns_taken(), 1);
        assert_eq!(game.active_player().rolls_taken(), 1);
        assert_eq!(game.phase(), TurnPhase::AwaitingAction);
        assert_eq!(game.dice().values(), [1, 2, 3, 4, 5]);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0].action, Action::Roll);
        assert!(game.result().is_none());
    }

    #[test]
    fn test_invalid_config() {
        let result = Game::with_source(&GameConfig::new(), FixedDice::new(vec![1]));
        assert!(matches!(result, Err(KniffelError::InvalidConfig { .. })));
    }

    #[test]
    fn test_roll_limit_through_engine() {
        let mut game = solo(vec![6]);

        game.roll().unwrap();
        game.roll().unwrap();
        let history_len = game.history().len();

        assert_eq!(
            game.roll(),
            Err(KniffelError::RollLimitExceeded { limit: 3 })
        );
        assert_eq!(game.history().len(), history_len);
    }

    #[test]
    fn test_hold_is_recorded() {
        let mut game = solo(vec![4, 4, 1, 2, 3]);

        game.hold(&[1, 2]).unwrap();
        game.roll().unwrap();

        assert_eq!(game.dice().values(), [4, 4, 4, 4, 1]);
        assert_eq!(game.history()[1].action, Action::hold(&[1, 2]));
        assert_eq!(game.history()[1].sequence, 1);
        assert_eq!(game.history()[2].sequence, 2);
    }

    #[test]
    fn test_rejected_hold_records_nothing() {
        let mut game = solo(vec![1]);

        assert_eq!(
            game.hold(&[1, 6]),
            Err(KniffelError::DieIndexOutOfRange { index: 6 })
        );
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.dice().held(), [false; 5]);
    }

    #[test]
    fn test_submit_rotates_and_auto_rolls() {
        let config = GameConfig::standard(2, 0);
        let mut game = Game::with_source(&config, FixedDice::new(vec![5])).unwrap();

        let outcome = game.submit_and_advance(5).unwrap();

        assert_eq!(outcome.score, 25);
        assert_eq!(game.active_id(), PlayerId(1));
        assert_eq!(game.active_player().turns_taken(), 1);
        assert_eq!(game.active_player().rolls_taken(), 1);
        assert_eq!(game.player(PlayerId(0)).rolls_taken(), 0);
        assert_eq!(game.phase(), TurnPhase::AwaitingAction);

        let last = &game.history()[game.history().len() - 1];
        assert_eq!(last.player, PlayerId(1));
        assert_eq!(last.sequence, 0);
    }

    #[test]
    fn test_failed_submit_keeps_turn() {
        let mut game = solo(vec![2]);
        game.submit_and_advance(2).unwrap();

        assert_eq!(
            game.submit_and_advance(2),
            Err(KniffelError::CategoryAlreadyFilled {
                category: CategoryKind::Twos
            })
        );
        assert_eq!(
            game.submit_and_advance(0),
            Err(KniffelError::CategoryIndexOutOfRange { index: 0 })
        );
        assert_eq!(game.active_player().turns_taken(), 2);
        assert_eq!(game.active_player().rolls_taken(), 1);
    }

    #[test]
    fn test_game_over_after_thirteen_turns() {
        let mut game = solo(vec![1, 3, 3, 5, 6]);

        for index in 1..=13 {
            assert!(!game.is_over());
            game.submit_and_advance(index).unwrap();
        }

        assert!(game.is_over());
        assert_eq!(game.phase(), TurnPhase::GameOver);
        assert_eq!(game.result(), Some(GameResult::Winner(PlayerId(0))));

        let before = game.clone();
        assert_eq!(game.roll(), Err(KniffelError::GameOver));
        assert_eq!(game.hold(&[1]), Err(KniffelError::GameOver));
        assert_eq!(game.unhold(&[1]), Err(KniffelError::GameOver));
        assert_eq!(game.submit_and_advance(1), Err(KniffelError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_auto_turn() {
        let config = GameConfig::new().with_auto("AI 1").with_human("Human");
        let mut game = Game::with_source(&config, FixedDice::new(vec![2, 3, 4, 5, 6])).unwrap();

        let outcome = game.play_auto_turn(&GreedyStrategy).unwrap();
        assert_eq!(outcome.category, CategoryKind::LargeStraight);
        assert_eq!(game.active_id(), PlayerId(1));

        assert_eq!(
            game.play_auto_turn(&GreedyStrategy),
            Err(KniffelError::NotAutomated {
                name: "Human".to_string()
            })
        );
    }

    #[test]
    fn test_play_auto_turns_stops_at_human() {
        let config = GameConfig::new()
            .with_auto("AI 1")
            .with_auto("AI 2")
            .with_human("Human");
        let mut game = Game::with_source(&config, FixedDice::new(vec![1, 1, 2, 2, 2])).unwrap();

        let played = game.play_auto_turns(&GreedyStrategy).unwrap();

        assert_eq!(played.len(), 2);
        assert_eq!(game.active_id(), PlayerId(2));
    }

    #[test]
    fn test_all_auto_game_finishes() {
        let config = GameConfig::standard(0, 3).with_seed(7);
        let mut game = Game::new(&config).unwrap();

        let played = game.play_auto_turns(&GreedyStrategy).unwrap();

        assert_eq!(played.len(), 39);
        assert!(game.is_over());
        for player in game.players().values() {
            assert!(player.board().is_complete());
        }
        let winners = game.result().unwrap();
        let (_, best) = game.standings()[0];
        for id in winners.winners() {
            assert_eq!(game.player(*id).total(), best);
        }
    }

    #[test]
    fn test_reset_restarts() {
        let mut game = solo(vec![6]);
        for index in 1..=4 {
            game.submit_and_advance(index).unwrap();
        }
        game.roll().unwrap();

        game.reset().unwrap();

        assert_eq!(game.active_player().turns_taken(), 1);
        assert_eq!(game.active_player().rolls_taken(), 1);
        assert_eq!(game.active_player().total(), 0);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_reset_rejected_after_game_over() {
        let mut game = solo(vec![6]);
        for index in 1..=13 {
            game.submit_and_advance(index).unwrap();
        }
        let before = game.clone();

        assert_eq!(game.reset(), Err(KniffelError::GameOver));
        assert!(game.is_over());
        assert_eq!(game, before);
        assert_eq!(game.active_player().total(), before.active_player().total());
    }

    #[test]
    fn test_validate() {
        let mut game = solo(vec![3]);
        assert_eq!(game.validate(), Ok(()));
        for index in 1..=13 {
            game.submit_and_advance(index).unwrap();
        }
        assert_eq!(game.validate(), Ok(()));

        let mut stray = solo(vec![3]);
        stray.active = PlayerId(4);
        assert!(matches!(
            stray.validate(),
            Err(KniffelError::InvalidState { .. })
        ));
    }
}
