//! Random self-play driver.
//!
//! Plays both sides by clicking: each ply picks one of the mover's pieces
//! that has somewhere to go, clicks it, then clicks one of its reachable
//! blocks. Clicks go through the pointer tracker and board geometry, so the
//! full input path is exercised. Used for soak testing and by the
//! `random_self_play` binary.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::game_state::chess_types::{PieceId, PieceKind, Player};
use crate::game_state::game_state::{GameState, TickOutcome};
use crate::input::pointer::PointerTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlayConfig {
    pub max_plies: u32,
    /// Fixed seed for a reproducible game; a random seed is drawn otherwise.
    pub seed: Option<u64>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The named player lost their king.
    KingCaptured(Player),
    /// The player to move had no piece with a reachable block.
    NoMoves(Player),
    PlyLimit,
    /// A scripted click did not land where it was aimed, so the game cannot
    /// advance with this geometry.
    InputRejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfPlayReport {
    pub seed: u64,
    pub plies: u32,
    pub captures: u32,
    pub end: GameEnd,
    pub final_layout: String,
    pub log: Vec<String>,
}

impl SelfPlayReport {
    pub fn summary(&self) -> String {
        let end = match self.end {
            GameEnd::KingCaptured(loser) => format!("{} king captured", loser),
            GameEnd::NoMoves(player) => format!("{} has no moves", player),
            GameEnd::PlyLimit => "ply limit reached".to_owned(),
            GameEnd::InputRejected => "click did not reach the board".to_owned(),
        };
        format!(
            "seed {} plies {} captures {} end: {} layout {}",
            self.seed, self.plies, self.captures, end, self.final_layout
        )
    }
}

pub fn play_random_game(game_config: &GameConfig, config: SelfPlayConfig) -> SelfPlayReport {
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    let mut rng = StdRng::seed_from_u64(seed);
    let geometry = game_config.effective_geometry();
    let mut tracker = PointerTracker::new();
    let mut state = GameState::new_game();
    let mut log = Vec::new();
    let mut captures = 0u32;
    let mut plies = 0u32;

    let end = loop {
        if plies >= config.max_plies {
            break GameEnd::PlyLimit;
        }

        let mover = state.current_player();
        let movable: Vec<PieceId> = state
            .pieces()
            .iter()
            .filter(|piece| piece.owner == mover)
            .map(|piece| piece.id)
            .filter(|id| {
                state
                    .reachable_blocks_for(*id)
                    .is_some_and(|blocks| !blocks.is_empty())
            })
            .collect();

        let Some(&choice) = movable.choose(&mut rng) else {
            break GameEnd::NoMoves(mover);
        };
        let Some(from) = state.piece(choice).map(|piece| piece.position) else {
            break GameEnd::NoMoves(mover);
        };

        let frame = tracker.click(geometry.block_centre(from));
        if state.tick(&geometry, &frame) != TickOutcome::Selected(choice) {
            break GameEnd::InputRejected;
        }

        let Some(&target) = state.reachable_blocks().choose(&mut rng) else {
            break GameEnd::NoMoves(mover);
        };
        let frame = tracker.click(geometry.block_centre(target.position));

        let TickOutcome::Moved { from, to, captured, .. } = state.tick(&geometry, &frame) else {
            break GameEnd::InputRejected;
        };
        plies += 1;
        log.push(format!("{} {} -> {}", mover, from, to));
        if let Some(victim) = captured {
            captures += 1;
            if victim.kind == PieceKind::King {
                break GameEnd::KingCaptured(victim.owner);
            }
        }
    };

    SelfPlayReport {
        seed,
        plies,
        captures,
        end,
        final_layout: state.layout(),
        log,
    }
}
