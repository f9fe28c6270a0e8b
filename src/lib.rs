//! Crate root module declarations for the tabletop chess board.
//!
//! This file exposes the board model (pieces, players, reachable-block
//! generation), the click-driven selection state machine, screen geometry,
//! pointer input, frame rendering data and the text front-end so binaries,
//! tests, and benches can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod geometry {
    pub mod board_geometry;
}

pub mod input {
    pub mod pointer;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod block_classification;
    pub mod castle_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
}

pub mod move_generation {
    pub mod occupancy;
    pub mod reachable_blocks;
}

pub mod render {
    pub mod draw_list;
    pub mod font;
    pub mod hover;
    pub mod sprite_sheet;
}

pub mod frontend {
    pub mod text_loop;
}

pub mod utils {
    pub mod layout_generator;
    pub mod layout_parser;
    pub mod render_game_state;
    pub mod self_play;
}
