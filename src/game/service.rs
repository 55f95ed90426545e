//! The turn engine.
//!
//! `GameService` owns everything one match needs: the board of the current
//! game, the doubling cube, the match scores, the dice, and the turn state.
//! It can be driven two ways:
//!
//! - **Step by step**: [`GameService::roll`] then [`GameService::select_move`]
//!   with an option index, repeated until the turn passes.
//! - **Selector-driven**: [`GameService::play_turn`] (or `execute(Command::Roll, ..)`)
//!   rolls and asks a [`MoveSelector`] for every choice until the turn ends.
//!
//! ## Turn flow
//!
//! After a roll the options are the single-checker moves legal for the
//! unused roll values. Each played option spends one roll and the options
//! are regenerated. The turn passes when every roll is spent or nothing
//! legal remains; leftover rolls are forfeited.
//!
//! ## Example
//!
//! ```
//! use backgammon_engine::core::{DicePair, MatchConfig, PlayerId};
//! use backgammon_engine::board::Board;
//! use backgammon_engine::game::GameService;
//!
//! let mut game = GameService::new(MatchConfig::new(3), ["Ada", "Bob"]).unwrap();
//! game.start_game_from(Board::new(), PlayerId::ONE).unwrap();
//! game.set_next_dice(DicePair::new(3, 1).unwrap());
//!
//! let roll = game.roll().unwrap();
//! assert_eq!(roll.options[0].to_string(), "1 -> 4");
//!
//! game.select_move(0).unwrap();
//! game.select_move(0).unwrap();
//! assert_eq!(game.current_player(), PlayerId::TWO);
//! ```

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, instrument, warn};

use super::match_manager::MatchManager;
use super::report::{CommandOutcome, GameView, MoveReport, OpeningRoll, RollReport, TurnReport};
use super::selector::MoveSelector;
use crate::board::{Board, CHECKERS_PER_PLAYER};
use crate::core::{
    option_label, Command, DicePair, GameRng, GameRngState, MatchConfig, Move, PlayerId,
    PlayerMap, TurnPhase, TurnRecord, TurnState,
};
use crate::cube::DoublingCube;
use crate::error::{EngineError, EngineResult};
use crate::rules::{classify_win, GameEnd, GameResult};

/// Turn engine for one match.
#[derive(Clone, Debug)]
pub struct GameService {
    config: MatchConfig,
    board: Board,
    cube: DoublingCube,
    match_manager: MatchManager,
    rng: GameRng,
    /// Dice for the next roll, used once.
    preset_dice: Option<DicePair>,
    turn: TurnState,
    /// Options for the current roll. Non-empty exactly while selecting.
    options: Vec<Move>,
    /// Turn being played.
    record: Option<TurnRecord>,
    /// Turns of the current game.
    history: Vector<TurnRecord>,
    last_result: Option<GameResult>,
}

impl GameService {
    /// Create a match between `names[0]` (player 1) and `names[1]` (player 2).
    ///
    /// No game is running until [`GameService::start_game`] is called.
    pub fn new(config: MatchConfig, names: [&str; 2]) -> EngineResult<Self> {
        config.validate()?;
        info!(
            player_one = names[0],
            player_two = names[1],
            match_length = config.match_length,
            "Creating match"
        );
        Ok(Self {
            board: Board::new(),
            cube: DoublingCube::new(config.cube_cap),
            match_manager: MatchManager::new(&config, names),
            rng: GameRng::new(config.seed),
            preset_dice: None,
            turn: TurnState::idle(),
            options: Vec::new(),
            record: None,
            history: Vector::new(),
            last_result: None,
            config,
        })
    }

    // === Game lifecycle ===

    /// Start the next game from the standard position.
    ///
    /// Each player rolls one die until the two differ; the higher die moves
    /// first. The opening dice are not played.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) -> EngineResult<OpeningRoll> {
        self.ensure_can_start()?;

        let mut rerolls = 0;
        let (one, two) = loop {
            let (one, two) = (self.rng.roll_die(), self.rng.roll_die());
            if one != two {
                break (one, two);
            }
            rerolls += 1;
            debug!(die = one, "Opening roll tied, rolling again");
        };
        let first = if one > two { PlayerId::ONE } else { PlayerId::TWO };

        self.begin(Board::new(), first);
        Ok(OpeningRoll {
            dice: PlayerMap::new(|p| if p == PlayerId::ONE { one } else { two }),
            rerolls,
            first,
        })
    }

    /// Start the next game from a prepared position with `first` on roll.
    #[instrument(skip(self, board))]
    pub fn start_game_from(&mut self, board: Board, first: PlayerId) -> EngineResult<()> {
        self.ensure_can_start()?;
        self.begin(board, first);
        Ok(())
    }

    fn ensure_can_start(&self) -> EngineResult<()> {
        if self.match_manager.is_match_over() {
            return Err(EngineError::invalid_command("the match is over"));
        }
        if !self.turn.is_game_over() {
            return Err(EngineError::invalid_command("a game is already in progress"));
        }
        Ok(())
    }

    fn begin(&mut self, board: Board, first: PlayerId) {
        self.board = board;
        self.turn = TurnState::new(first);
        self.options.clear();
        self.record = None;
        self.history = Vector::new();
        self.last_result = None;
        info!(
            game = self.match_manager.current_game_number(),
            first = %self.match_manager.player(first),
            "Game started"
        );
    }

    // === Turn steps ===

    /// Roll for the current player and generate the first options.
    ///
    /// With no legal move the turn is forfeited on the spot and
    /// `completed` carries the empty turn.
    #[instrument(skip(self))]
    pub fn roll(&mut self) -> EngineResult<RollReport> {
        self.expect_phase(TurnPhase::AwaitingRoll)?;

        let player = self.turn.current;
        let dice = match self.preset_dice.take() {
            Some(dice) => dice,
            None => self.rng.roll_dice(),
        };
        self.turn.dice = Some(dice);
        self.turn.pending_rolls = dice.rolls();
        self.turn.phase = TurnPhase::SelectingMove;
        self.record = Some(TurnRecord {
            player,
            dice,
            moves: SmallVec::new(),
            forfeited: SmallVec::new(),
            turn: self.turn.turn_number,
        });
        self.refresh_options();
        debug!(%player, %dice, options = self.options.len(), "Dice rolled");

        let options = self.options.clone();
        let completed = if options.is_empty() {
            info!(%player, %dice, "No legal move, turn forfeited");
            self.end_turn()
        } else {
            None
        };
        Ok(RollReport {
            player,
            dice,
            options,
            completed,
        })
    }

    /// Play option `index` of the current options.
    ///
    /// An index outside the options is rejected with nothing changed.
    #[instrument(skip(self))]
    pub fn select_move(&mut self, index: usize) -> EngineResult<MoveReport> {
        self.expect_phase(TurnPhase::SelectingMove)?;

        let mv = *self.options.get(index).ok_or_else(|| {
            EngineError::illegal_move(format!(
                "'{}' is not one of the {} options",
                option_label(index),
                self.options.len()
            ))
        })?;
        let player = self.turn.current;

        let mut turn = self.turn.clone();
        let roll = turn
            .consume_roll(mv.distance(player))
            .ok_or_else(|| EngineError::illegal_move(format!("no remaining roll covers {}", mv)))?;
        let hit = self.board.apply(player, mv)?;
        self.turn = turn;
        if let Some(record) = self.record.as_mut() {
            record.moves.push(mv);
        }
        debug!(%player, %mv, roll, hit, "Move played");

        if self.board.off_count(player) == CHECKERS_PER_PLAYER {
            let kind = classify_win(&self.board, player);
            let points = self.cube.value() * kind.multiplier();
            let (result, completed) =
                self.complete_game(Some(player), GameEnd::BoreOff(kind), points);
            return Ok(MoveReport {
                player,
                mv,
                roll,
                hit,
                completed,
                result: Some(result),
            });
        }

        self.refresh_options();
        let completed = if self.options.is_empty() {
            self.end_turn()
        } else {
            None
        };
        Ok(MoveReport {
            player,
            mv,
            roll,
            hit,
            completed,
            result: None,
        })
    }

    /// Play a whole turn, asking `selector` for every choice.
    ///
    /// Rolls first when the dice are not yet rolled; a turn left in
    /// `SelectingMove` by an earlier failure is resumed. After
    /// `max_selection_attempts` out-of-range answers in a row the turn stops
    /// with `IllegalMove`, still selecting.
    #[instrument(skip(self, selector))]
    pub fn play_turn<S>(&mut self, selector: &mut S) -> EngineResult<TurnReport>
    where
        S: MoveSelector + ?Sized,
    {
        if self.turn.phase != TurnPhase::SelectingMove {
            let report = self.roll()?;
            if let Some(record) = report.completed {
                return Ok(TurnReport {
                    record,
                    result: None,
                });
            }
        }

        let max_attempts = self.config.max_selection_attempts;
        loop {
            let player = self.turn.current;
            let mut attempts = 0;
            let index = loop {
                let index = selector.select(player, &self.options);
                if index < self.options.len() {
                    break index;
                }
                attempts += 1;
                warn!(
                    %player,
                    index,
                    options = self.options.len(),
                    attempts,
                    "Selection out of range"
                );
                if attempts >= max_attempts {
                    return Err(EngineError::illegal_move(format!(
                        "no valid option chosen after {} attempts",
                        attempts
                    )));
                }
            };

            let report = self.select_move(index)?;
            if let Some(record) = report.completed {
                return Ok(TurnReport {
                    record,
                    result: report.result,
                });
            }
        }
    }

    // === Doubling ===

    /// Offer a double on behalf of the current player.
    ///
    /// Returns the player who must answer.
    #[instrument(skip(self))]
    pub fn offer_double(&mut self) -> EngineResult<PlayerId> {
        self.expect_phase(TurnPhase::AwaitingRoll)?;

        let player = self.turn.current;
        if !self.cube.may_offer(player) {
            return Err(EngineError::invalid_command(format!(
                "{} owns the cube",
                self.match_manager.player(player.opponent())
            )));
        }
        if !self.cube.can_double() {
            return Err(EngineError::invalid_command(format!(
                "the cube is already at {}",
                self.cube.value()
            )));
        }

        self.turn.phase = TurnPhase::DoubleOffered { offered_by: player };
        info!(%player, cube = self.cube.value(), "Double offered");
        Ok(player.opponent())
    }

    /// Accept the pending double: the cube doubles and the acceptor owns it
    /// and is on roll. Returns the new cube value.
    #[instrument(skip(self))]
    pub fn accept_double(&mut self) -> EngineResult<u32> {
        let offered_by = self.pending_offer()?;
        let responder = offered_by.opponent();

        let value = self.cube.double_value(responder)?;
        self.turn.current = responder;
        self.turn.phase = TurnPhase::AwaitingRoll;
        info!(player = %responder, cube = value, "Double accepted");
        Ok(value)
    }

    /// Refuse the pending double: the offerer wins the current cube value
    /// and the game ends with the board untouched.
    #[instrument(skip(self))]
    pub fn refuse_double(&mut self) -> EngineResult<GameResult> {
        let offered_by = self.pending_offer()?;
        info!(player = %offered_by.opponent(), "Double refused");

        let points = self.cube.value();
        Ok(self
            .complete_game(Some(offered_by), GameEnd::DoubleRefused, points)
            .0)
    }

    fn pending_offer(&self) -> EngineResult<PlayerId> {
        match self.turn.phase {
            TurnPhase::DoubleOffered { offered_by } => Ok(offered_by),
            _ => Err(EngineError::invalid_command("no double has been offered")),
        }
    }

    // === Early termination ===

    /// Stop the current game. The strictly higher scorer gets one point;
    /// tied scores award nothing.
    #[instrument(skip(self))]
    pub fn end_game(&mut self) -> EngineResult<GameResult> {
        match self.turn.phase {
            TurnPhase::GameOver => Err(EngineError::invalid_command("no game in progress")),
            TurnPhase::DoubleOffered { .. } => Err(self.phase_error()),
            TurnPhase::AwaitingRoll | TurnPhase::SelectingMove => {
                let leader = self.match_manager.leader();
                let points = u32::from(leader.is_some());
                Ok(self.complete_game(leader, GameEnd::Stopped, points).0)
            }
        }
    }

    /// Stop the match. Awards the early-termination point like
    /// [`GameService::end_game`], then forces the match over.
    #[instrument(skip(self))]
    pub fn end_match(&mut self) -> EngineResult<GameResult> {
        if self.match_manager.is_match_over() {
            return Err(EngineError::invalid_command("the match is already over"));
        }

        let result = if self.turn.is_game_over() {
            let leader = self.match_manager.leader();
            let points = u32::from(leader.is_some());
            self.match_manager.increment_score(leader, points);
            let result = GameResult {
                winner: leader,
                end: GameEnd::Stopped,
                points,
            };
            self.last_result = Some(result);
            result
        } else {
            self.end_game()?
        };

        self.match_manager.set_match_over();
        info!(winner = self.match_manager.winner_name(), "Match ended early");
        Ok(result)
    }

    // === Commands ===

    /// Preset the dice of the next roll. Used exactly once.
    pub fn set_next_dice(&mut self, dice: DicePair) {
        debug!(%dice, "Next dice preset");
        self.preset_dice = Some(dice);
    }

    /// Run one typed command.
    ///
    /// While a double is pending only ACCEPT and REFUSE are accepted.
    #[instrument(skip(self, selector))]
    pub fn execute<S>(&mut self, command: Command, selector: &mut S) -> EngineResult<CommandOutcome>
    where
        S: MoveSelector + ?Sized,
    {
        self.dispatch(command, selector)
            .inspect_err(|err| warn!(%err, "Command rejected"))
    }

    fn dispatch<S>(&mut self, command: Command, selector: &mut S) -> EngineResult<CommandOutcome>
    where
        S: MoveSelector + ?Sized,
    {
        let kind = command.kind();
        if let Some(responder) = self.turn.player_to_respond() {
            if !matches!(command, Command::Accept | Command::Refuse) {
                return Err(EngineError::invalid_command(format!(
                    "{} must ACCEPT or REFUSE the double before {}",
                    self.match_manager.player(responder),
                    kind
                )));
            }
        }

        let outcome = match command {
            Command::Roll => CommandOutcome::Turn(self.play_turn(selector)?),
            Command::Pip => CommandOutcome::Pips(self.pip_counts()),
            Command::Dice(dice) => {
                self.set_next_dice(dice);
                CommandOutcome::DicePreset(dice)
            }
            Command::Double => {
                let to = self.offer_double()?;
                CommandOutcome::DoubleOffered {
                    by: to.opponent(),
                    to,
                }
            }
            Command::Accept => {
                let value = self.accept_double()?;
                CommandOutcome::DoubleAccepted {
                    value,
                    owner: self.turn.current,
                }
            }
            Command::Refuse => CommandOutcome::GameOver(self.refuse_double()?),
            Command::EndGame => CommandOutcome::GameOver(self.end_game()?),
            Command::EndMatch => CommandOutcome::GameOver(self.end_match()?),
            Command::Hint | Command::Quit | Command::Test(_) => CommandOutcome::Delegated(kind),
        };
        Ok(outcome)
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn cube(&self) -> &DoublingCube {
        &self.cube
    }

    #[must_use]
    pub fn match_manager(&self) -> &MatchManager {
        &self.match_manager
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn.current
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    #[must_use]
    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    /// Options for the current roll, in selection order.
    #[must_use]
    pub fn options(&self) -> &[Move] {
        &self.options
    }

    /// Options rendered for selection: `"A) 1 -> 4"`.
    #[must_use]
    pub fn labelled_options(&self) -> Vec<String> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, mv)| format!("{}) {}", option_label(i), mv))
            .collect()
    }

    #[must_use]
    pub fn pending_rolls(&self) -> &[u8] {
        &self.turn.pending_rolls
    }

    #[must_use]
    pub fn pip_count(&self, player: PlayerId) -> u32 {
        self.board.pip_count(player)
    }

    #[must_use]
    pub fn pip_counts(&self) -> PlayerMap<u32> {
        PlayerMap::new(|p| self.board.pip_count(p))
    }

    /// No game is running (finished, or not started yet).
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.turn.is_game_over()
    }

    #[must_use]
    pub fn is_match_over(&self) -> bool {
        self.match_manager.is_match_over()
    }

    /// Result of the most recent game.
    #[must_use]
    pub fn last_result(&self) -> Option<GameResult> {
        self.last_result
    }

    /// Completed turns of the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Dice generator state, for reproducing a match.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Owned snapshot of everything a display needs.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            board: self.board.snapshot(),
            current_player: self.turn.current,
            phase: self.turn.phase,
            pending_rolls: self.turn.pending_rolls.to_vec(),
            pip_counts: self.pip_counts(),
            cube_value: self.cube.value(),
            cube_owner: self.cube.owner(),
            scores: self.match_manager.scores().clone(),
            game_number: self.match_manager.current_game_number(),
            game_over: self.turn.is_game_over(),
            match_over: self.match_manager.is_match_over(),
            options: self.labelled_options(),
        }
    }

    // === Internals ===

    fn expect_phase(&self, phase: TurnPhase) -> EngineResult<()> {
        if self.turn.phase == phase {
            Ok(())
        } else {
            Err(self.phase_error())
        }
    }

    fn phase_error(&self) -> EngineError {
        match self.turn.phase {
            TurnPhase::AwaitingRoll => EngineError::invalid_command("the dice have not been rolled"),
            TurnPhase::SelectingMove => {
                EngineError::invalid_command("select one of the move options first")
            }
            TurnPhase::DoubleOffered { offered_by } => EngineError::invalid_command(format!(
                "{} must ACCEPT or REFUSE the double",
                self.match_manager.player(offered_by.opponent())
            )),
            TurnPhase::GameOver => EngineError::invalid_command("no game in progress"),
        }
    }

    fn refresh_options(&mut self) {
        self.options = self
            .board
            .legal_moves(self.turn.current, &self.turn.pending_rolls);
    }

    /// File the current turn in the history, forfeiting unused rolls.
    fn close_turn(&mut self) -> Option<TurnRecord> {
        let mut record = self.record.take()?;
        record.forfeited = self.turn.pending_rolls.iter().copied().collect();
        self.history.push_back(record.clone());
        Some(record)
    }

    fn end_turn(&mut self) -> Option<TurnRecord> {
        let record = self.close_turn();
        self.options.clear();
        self.turn.pass_turn();
        debug!(next = %self.turn.current, turn = self.turn.turn_number, "Turn passed");
        record
    }

    fn complete_game(
        &mut self,
        winner: Option<PlayerId>,
        end: GameEnd,
        points: u32,
    ) -> (GameResult, Option<TurnRecord>) {
        let completed = self.close_turn();
        self.match_manager.increment_score(winner, points);
        self.match_manager.increment_games_played();
        self.cube.reset();
        self.options.clear();
        self.turn.pending_rolls.clear();
        self.turn.phase = TurnPhase::GameOver;

        let result = GameResult {
            winner,
            end,
            points,
        };
        self.last_result = Some(result);
        info!(
            winner = ?winner,
            end = ?end,
            points,
            games_played = self.match_manager.games_played(),
            "Game over"
        );
        if self.match_manager.is_match_over() {
            info!(winner = self.match_manager.winner_name(), "Match over");
        }
        (result, completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::selector::ScriptedSelector;
    use crate::rules::WinKind;

    fn service() -> GameService {
        GameService::new(MatchConfig::new(3), ["Ada", "Bob"]).unwrap()
    }

    fn dice(a: u8, b: u8) -> DicePair {
        DicePair::new(a, b).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let err = GameService::new(MatchConfig::new(0), ["Ada", "Bob"]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    #[test]
    fn test_no_game_before_start() {
        let mut game = service();
        assert!(game.is_game_over());
        assert!(game.roll().is_err());
        assert!(game.end_game().is_err());
    }

    #[test]
    fn test_start_game_decides_first_player() {
        let mut game = service();
        let opening = game.start_game().unwrap();

        assert_ne!(opening.dice[PlayerId::ONE], opening.dice[PlayerId::TWO]);
        let expected = if opening.dice[PlayerId::ONE] > opening.dice[PlayerId::TWO] {
            PlayerId::ONE
        } else {
            PlayerId::TWO
        };
        assert_eq!(opening.first, expected);
        assert_eq!(game.current_player(), expected);
        assert_eq!(game.phase(), TurnPhase::AwaitingRoll);
        assert!(game.start_game().is_err());
    }

    #[test]
    fn test_preset_dice_used_once() {
        let mut game = service();
        game.start_game_from(Board::new(), PlayerId::ONE).unwrap();
        game.set_next_dice(dice(6, 6));

        let roll = game.roll().unwrap();
        assert_eq!(roll.dice, dice(6, 6));
        assert_eq!(game.pending_rolls(), &[6, 6, 6, 6]);
        assert!(game.preset_dice.is_none());
    }

    #[test]
    fn test_bad_index_changes_nothing() {
        let mut game = service();
        game.start_game_from(Board::new(), PlayerId::ONE).unwrap();
        game.set_next_dice(dice(3, 1));
        game.roll().unwrap();
        let before = game.board().clone();

        let err = game.select_move(99).unwrap_err();

        assert!(matches!(err, EngineError::IllegalMove { .. }));
        assert_eq!(game.board(), &before);
        assert_eq!(game.pending_rolls(), &[3, 1]);
        assert_eq!(game.phase(), TurnPhase::SelectingMove);
    }

    #[test]
    fn test_turn_passes_when_rolls_spent() {
        let mut game = service();
        game.start_game_from(Board::new(), PlayerId::ONE).unwrap();
        game.set_next_dice(dice(3, 1));
        game.roll().unwrap();

        let first = game.select_move(0).unwrap();
        assert_eq!(first.mv, Move::new(1, 4));
        assert_eq!(first.roll, 3);
        assert!(first.completed.is_none());

        let second = game.select_move(0).unwrap();
        let record = second.completed.unwrap();
        assert_eq!(record.moves.len(), 2);
        assert!(record.forfeited.is_empty());
        assert_eq!(game.current_player(), PlayerId::TWO);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_selector_gives_up_after_attempts() {
        let config = MatchConfig::new(3).with_max_selection_attempts(2);
        let mut game = GameService::new(config, ["Ada", "Bob"]).unwrap();
        game.start_game_from(Board::new(), PlayerId::ONE).unwrap();
        game.set_next_dice(dice(3, 1));

        let mut selector = ScriptedSelector::new([50, 60, 70]);
        let err = game.play_turn(&mut selector).unwrap_err();

        assert!(matches!(err, EngineError::IllegalMove { .. }));
        assert_eq!(game.phase(), TurnPhase::SelectingMove);
        assert_eq!(selector.remaining(), 1);

        // Resumes without rolling again.
        let report = game.play_turn(&mut selector).unwrap();
        assert_eq!(report.record.dice, dice(3, 1));
        assert_eq!(report.record.moves.len(), 2);
    }

    #[test]
    fn test_bear_off_win_scores_gammon() {
        let board = Board::empty()
            .with_off(PlayerId::ONE, 14)
            .with_point(PlayerId::ONE, 24, 1)
            .with_point(PlayerId::TWO, 12, 15);
        let mut game = service();
        game.start_game_from(board, PlayerId::ONE).unwrap();
        game.set_next_dice(dice(2, 1));
        game.roll().unwrap();

        let report = game.select_move(0).unwrap();
        let result = report.result.unwrap();

        assert_eq!(result.end, GameEnd::BoreOff(WinKind::Gammon));
        assert_eq!(result.points, 2);
        assert!(game.is_game_over());
        assert_eq!(game.match_manager().score(PlayerId::ONE), 2);
        assert_eq!(game.match_manager().games_played(), 1);
    }

    #[test]
    fn test_double_pending_blocks_other_commands() {
        let mut game = service();
        game.start_game_from(Board::new(), PlayerId::ONE).unwrap();
        assert_eq!(game.offer_double().unwrap(), PlayerId::TWO);

        let mut selector = crate::game::selector::FirstOption;
        for command in [Command::Roll, Command::Pip, Command::Double, Command::EndGame] {
            let err = game.execute(command, &mut selector).unwrap_err();
            assert!(matches!(err, EngineError::InvalidCommand { .. }));
        }
        assert!(game.roll().is_err());

        let outcome = game.execute(Command::Accept, &mut selector).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::DoubleAccepted {
                value: 2,
                owner: PlayerId::TWO
            }
        );
    }

    #[test]
    fn test_view_labels_options() {
        let mut game = service();
        game.start_game_from(Board::new(), PlayerId::ONE).unwrap();
        game.set_next_dice(dice(3, 1));
        game.roll().unwrap();

        let view = game.view();
        assert_eq!(view.options[0], "A) 1 -> 4");
        assert_eq!(view.options[1], "B) 1 -> 2");
        assert_eq!(view.pending_rolls, vec![3, 1]);
        assert_eq!(view.pip_counts[PlayerId::ONE], 167);
    }

    #[test]
    fn test_service_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<GameService>();
    }
}
