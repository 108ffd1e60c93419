//! Othello game implementation.

use tracing::{debug, info};

use crate::core::{
    ConfigError, GameConfig, GameError, GameState, Move, Opening, Owner, OwnerMap, Player,
};
use crate::rules::{self, GameResult, MoveOutcome, RulesEngine};

/// A configured two-player game.
#[derive(Clone, Debug)]
pub struct OthelloGame {
    config: GameConfig,
    players: OwnerMap<Player>,
}

/// Builder for creating an OthelloGame.
#[derive(Clone, Debug, Default)]
pub struct OthelloGameBuilder {
    config: GameConfig,
}

impl OthelloGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration (for example one loaded from TOML).
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.config.rows = rows;
        self
    }

    pub fn cols(mut self, cols: usize) -> Self {
        self.config.cols = cols;
        self
    }

    pub fn first_player(mut self, owner: Owner) -> Self {
        self.config.first_player = owner;
        self
    }

    pub fn names(mut self, player_a: impl Into<String>, player_b: impl Into<String>) -> Self {
        self.config.player_a = player_a.into();
        self.config.player_b = player_b.into();
        self
    }

    pub fn opening(mut self, opening: Opening) -> Self {
        self.config.opening = opening;
        self
    }

    /// Validate the configuration and build the game and initial state.
    pub fn build(self) -> Result<(OthelloGame, GameState), ConfigError> {
        let config = self.config;
        config.validate()?;

        let board = config.new_board()?;
        let state = GameState::new(board, config.first_player);
        let players = config.players();

        info!(
            rows = config.rows,
            cols = config.cols,
            first = ?config.first_player,
            opening = ?config.opening,
            "game created"
        );

        Ok((OthelloGame { config, players }, state))
    }
}

impl OthelloGame {
    /// Both seated players.
    pub fn players(&self) -> &OwnerMap<Player> {
        &self.players
    }

    /// The player record for an owner.
    pub fn player(&self, owner: Owner) -> &Player {
        &self.players[owner]
    }

    /// Check if neither owner can place a disc.
    fn is_blocked(state: &GameState) -> bool {
        Owner::ALL
            .iter()
            .all(|&owner| !rules::has_legal_placement(&state.board, owner))
    }
}

impl RulesEngine for OthelloGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_moves(&self, state: &GameState, owner: Owner) -> Vec<Move> {
        // Only the active owner can act
        if state.active != owner || self.is_terminal(state).is_some() {
            return vec![];
        }

        let placements: Vec<Move> = rules::legal_placements(&state.board, owner)
            .into_iter()
            .map(Move::Place)
            .collect();

        if placements.is_empty() {
            vec![Move::Skip]
        } else {
            placements
        }
    }

    fn apply_move(
        &mut self,
        state: &mut GameState,
        owner: Owner,
        mv: Move,
    ) -> Result<MoveOutcome, GameError> {
        if self.is_terminal(state).is_some() {
            return Err(GameError::GameOver);
        }
        if state.active != owner {
            return Err(GameError::NotYourTurn {
                expected: state.active,
                got: owner,
            });
        }

        let outcome = rules::apply_move(&mut state.board, owner, mv)?;

        if let MoveOutcome::Applied(applied) = &outcome {
            state.record(mv, applied.flipped.len());

            if let Some(result) = self.is_terminal(state) {
                let score = state.score();
                debug!(
                    ?result,
                    player_a = score.get(Owner::PlayerA),
                    player_b = score.get(Owner::PlayerB),
                    "game over"
                );
            }
        }

        Ok(outcome)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        let over = state.board.is_full() || state.consecutive_passes >= 2 || Self::is_blocked(state);

        over.then(|| GameResult::from_score(&state.score()))
    }
}
