//! Live game state and the turn/selection state machine.
//!
//! `GameState` owns the piece collection, whose turn it is, the hovered
//! piece and the current selection together with its reachable blocks. It is
//! one explicit value owned by the frame loop; every mutation happens inside
//! `update`, and the render pass only reads it.

use crate::errors::GameError;
use crate::game_state::chess_rules::{home_ranks, BACK_RANK};
use crate::game_state::chess_types::*;
use crate::geometry::board_geometry::BoardGeometry;
use crate::input::pointer::InputFrame;
use crate::move_generation::occupancy::Occupancy;
use crate::move_generation::reachable_blocks::find_reachable_blocks;
use crate::utils::layout_generator::generate_layout;
use crate::utils::layout_parser::parse_layout;

/// The selected piece and the destinations computed when it was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub piece: PieceId,
    pub reachable: Vec<ReachableBlock>,
}

/// What a single tick did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No release this tick, or a release that changed nothing.
    Idle,
    /// A piece of the current player became (or stayed) selected.
    Selected(PieceId),
    /// The selection was dropped without moving.
    Deselected,
    Moved {
        piece: PieceId,
        from: Position,
        to: Position,
        captured: Option<Piece>,
    },
}

#[derive(Debug, Clone)]
pub struct GameState {
    pieces: Vec<Piece>,
    current_player: Player,
    hovered: Option<PieceId>,
    hovered_cell: Position,
    selection: Option<Selection>,
    next_id: u32,
}

impl GameState {
    /// Board with no pieces; `first` moves first.
    pub fn new_empty(first: Player) -> Self {
        Self {
            pieces: Vec::with_capacity(32),
            current_player: first,
            hovered: None,
            hovered_cell: Position::new(0, 0),
            selection: None,
            next_id: 0,
        }
    }

    /// Standard 32-piece starting layout with Player 1 to move.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty(Player::White);
        for player in [Player::White, Player::Black] {
            let (home, pawns) = home_ranks(player);
            for (file, kind) in (1..=8).zip(BACK_RANK) {
                state.push_piece(kind, player, Position::new(file, home));
            }
            for file in 1..=8 {
                state.push_piece(PieceKind::Pawn, player, Position::new(file, pawns));
            }
        }
        state
    }

    /// Build a state from a board-placement string (first row = rank 1).
    pub fn from_layout(layout: &str, to_move: Player) -> Result<Self, GameError> {
        let mut state = Self::new_empty(to_move);
        for (kind, owner, position) in parse_layout(layout)? {
            state.place(kind, owner, position)?;
        }
        Ok(state)
    }

    /// Put a new piece on an empty on-board cell.
    pub fn place(
        &mut self,
        kind: PieceKind,
        owner: Player,
        position: Position,
    ) -> Result<PieceId, GameError> {
        if !position.is_on_board() {
            return Err(GameError::OffBoard(position));
        }
        if self.piece_at(position).is_some() {
            return Err(GameError::CellOccupied(position));
        }
        Ok(self.push_piece(kind, owner, position))
    }

    fn push_piece(&mut self, kind: PieceKind, owner: Player, position: Position) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces.push(Piece {
            id,
            kind,
            owner,
            position,
        });
        id
    }

    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    pub fn hovered_cell(&self) -> Position {
        self.hovered_cell
    }

    /// Look up a piece by id. `None` once the piece has been captured.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id == id)
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        Occupancy::new(&self.pieces).piece_at(position)
    }

    pub fn hovered_piece(&self) -> Option<&Piece> {
        self.hovered.and_then(|id| self.piece(id))
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selection.as_ref().and_then(|s| self.piece(s.piece))
    }

    /// Destinations of the selected piece; empty when nothing is selected.
    pub fn reachable_blocks(&self) -> &[ReachableBlock] {
        self.selection
            .as_ref()
            .map(|s| s.reachable.as_slice())
            .unwrap_or(&[])
    }

    /// Board-placement string for the current pieces (first row = rank 1).
    pub fn layout(&self) -> String {
        generate_layout(&self.pieces)
    }

    /// Reachable blocks of any piece on the current board, without selecting it.
    pub fn reachable_blocks_for(&self, id: PieceId) -> Option<Vec<ReachableBlock>> {
        let piece = self.piece(id)?;
        Some(find_reachable_blocks(piece, &Occupancy::new(&self.pieces)))
    }

    /// Run one frame: map the pointer to a cell and feed it to `update`.
    pub fn tick(&mut self, geometry: &BoardGeometry, frame: &InputFrame) -> TickOutcome {
        let (x, y) = frame.pointer;
        let cell = geometry.screen_to_position(x, y);
        self.update(cell, frame.released)
    }

    /// Resolve the hovered piece for `cell` and, on a release, advance the
    /// selection state machine.
    pub fn update(&mut self, cell: Position, released: bool) -> TickOutcome {
        self.hovered_cell = cell;
        self.hovered = self.piece_at(cell).map(|piece| piece.id);

        if !released {
            return TickOutcome::Idle;
        }

        let hovered_owner = self.hovered_piece().map(|piece| piece.owner);
        match self.selection.take() {
            None => match (self.hovered, hovered_owner) {
                (Some(id), Some(owner)) if owner == self.current_player => self.select(id),
                _ => TickOutcome::Idle,
            },
            Some(selection) => {
                if selection.reachable.iter().any(|b| b.position == cell) {
                    return self.move_selected(selection.piece, cell);
                }
                match (self.hovered, hovered_owner) {
                    (Some(id), Some(owner)) if owner == self.current_player => self.select(id),
                    _ => TickOutcome::Deselected,
                }
            }
        }
    }

    fn select(&mut self, id: PieceId) -> TickOutcome {
        match self.reachable_blocks_for(id) {
            Some(reachable) => {
                self.selection = Some(Selection {
                    piece: id,
                    reachable,
                });
                TickOutcome::Selected(id)
            }
            None => TickOutcome::Idle,
        }
    }

    fn move_selected(&mut self, id: PieceId, to: Position) -> TickOutcome {
        let mover = self.current_player;
        let Some(from) = self.piece(id).map(|piece| piece.position) else {
            return TickOutcome::Deselected;
        };

        let captured = self
            .pieces
            .iter()
            .position(|piece| piece.position == to && piece.owner != mover)
            .map(|index| self.pieces.remove(index));
        if let Some(piece) = self.pieces.iter_mut().find(|piece| piece.id == id) {
            piece.position = to;
        }

        self.current_player = mover.opposite();
        self.hovered = self.piece_at(to).map(|piece| piece.id);

        TickOutcome::Moved {
            piece: id,
            from,
            to,
            captured,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_LAYOUT;

    fn release_at(state: &mut GameState, file: i8, rank: i8) -> TickOutcome {
        state.update(Position::new(file, rank), true)
    }

    #[test]
    fn new_game_has_thirty_two_pieces_in_insertion_order() {
        let state = GameState::new_game();
        assert_eq!(state.pieces().len(), 32);
        assert_eq!(state.current_player(), Player::White);
        assert_eq!(state.layout(), STARTING_LAYOUT);

        let first = state.pieces()[0];
        assert_eq!(first.kind, PieceKind::Castle);
        assert_eq!(first.owner, Player::White);
        assert_eq!(first.position, Position::new(1, 8));

        let king = state.piece_at(Position::new(5, 1)).map(|p| (p.kind, p.owner));
        assert_eq!(king, Some((PieceKind::King, Player::Black)));
    }

    #[test]
    fn hover_is_recomputed_every_tick() {
        let mut state = GameState::new_game();
        state.update(Position::new(2, 7), false);
        assert_eq!(state.hovered_piece().map(|p| p.position), Some(Position::new(2, 7)));
        state.update(Position::new(4, 4), false);
        assert!(state.hovered_piece().is_none());
        state.update(Position::new(9, 0), false);
        assert!(state.hovered_piece().is_none());
        assert!(state.selection().is_none());
    }

    #[test]
    fn only_current_player_can_select() {
        let mut state = GameState::new_game();
        assert_eq!(release_at(&mut state, 5, 2), TickOutcome::Idle);
        assert!(state.selection().is_none());
        assert_eq!(release_at(&mut state, 4, 4), TickOutcome::Idle);

        let outcome = release_at(&mut state, 5, 7);
        assert!(matches!(outcome, TickOutcome::Selected(_)));
        assert_eq!(state.reachable_blocks(), &[ReachableBlock::empty(Position::new(5, 6))]);
    }

    #[test]
    fn press_without_release_does_not_select() {
        let mut state = GameState::new_game();
        assert_eq!(state.update(Position::new(5, 7), false), TickOutcome::Idle);
        assert!(state.selection().is_none());
    }

    #[test]
    fn move_flips_player_and_clears_selection() {
        let mut state = GameState::new_game();
        release_at(&mut state, 5, 7);
        let outcome = release_at(&mut state, 5, 6);

        match outcome {
            TickOutcome::Moved { from, to, captured, .. } => {
                assert_eq!(from, Position::new(5, 7));
                assert_eq!(to, Position::new(5, 6));
                assert!(captured.is_none());
            }
            other => panic!("expected a move, got {other:?}"),
        }
        assert_eq!(state.current_player(), Player::Black);
        assert!(state.selection().is_none());
        assert_eq!(state.pieces().len(), 32);
        assert!(state.piece_at(Position::new(5, 7)).is_none());
    }

    #[test]
    fn capture_removes_exactly_one_enemy() -> Result<(), GameError> {
        let mut state = GameState::new_empty(Player::White);
        let castle = state.place(PieceKind::Castle, Player::White, Position::new(1, 8))?;
        let victim = state.place(PieceKind::Bishop, Player::Black, Position::new(1, 3))?;
        state.place(PieceKind::King, Player::Black, Position::new(8, 1))?;

        release_at(&mut state, 1, 8);
        let outcome = release_at(&mut state, 1, 3);

        match outcome {
            TickOutcome::Moved { piece, captured, .. } => {
                assert_eq!(piece, castle);
                assert_eq!(captured.map(|p| p.id), Some(victim));
            }
            other => panic!("expected a capture, got {other:?}"),
        }
        assert_eq!(state.pieces().len(), 2);
        assert!(state.piece(victim).is_none());
        assert_eq!(state.piece(castle).map(|p| p.position), Some(Position::new(1, 3)));
        assert_eq!(state.hovered_piece().map(|p| p.id), Some(castle));
        assert_eq!(state.current_player(), Player::Black);
        Ok(())
    }

    #[test]
    fn missing_mover_leaves_board_untouched() -> Result<(), GameError> {
        let mut state = GameState::new_empty(Player::White);
        state.place(PieceKind::Castle, Player::White, Position::new(1, 8))?;
        let victim = state.place(PieceKind::Bishop, Player::Black, Position::new(1, 3))?;

        let outcome = state.move_selected(PieceId(99), Position::new(1, 3));

        assert_eq!(outcome, TickOutcome::Deselected);
        assert_eq!(state.pieces().len(), 2);
        assert!(state.piece(victim).is_some());
        assert_eq!(state.current_player(), Player::White);
        Ok(())
    }

    #[test]
    fn king_can_be_captured() -> Result<(), GameError> {
        let mut state = GameState::new_empty(Player::Black);
        state.place(PieceKind::Queen, Player::Black, Position::new(4, 4))?;
        let king = state.place(PieceKind::King, Player::White, Position::new(4, 8))?;

        release_at(&mut state, 4, 4);
        release_at(&mut state, 4, 8);

        assert!(state.piece(king).is_none());
        assert_eq!(state.pieces().len(), 1);
        Ok(())
    }

    #[test]
    fn clicking_elsewhere_deselects() {
        let mut state = GameState::new_game();
        release_at(&mut state, 2, 8);
        assert!(state.selection().is_some());

        assert_eq!(release_at(&mut state, 5, 5), TickOutcome::Deselected);
        assert!(state.selection().is_none());
        assert_eq!(state.current_player(), Player::White);

        release_at(&mut state, 2, 8);
        assert_eq!(release_at(&mut state, 2, 1), TickOutcome::Deselected);
        assert!(state.selection().is_none());
    }

    #[test]
    fn reselecting_replaces_reachable_set() {
        let mut state = GameState::new_game();
        release_at(&mut state, 2, 8);
        let knight_blocks = state.reachable_blocks().to_vec();
        assert_eq!(knight_blocks.len(), 2);

        let outcome = release_at(&mut state, 8, 7);
        let pawn = state.piece_at(Position::new(8, 7)).map(|p| p.id);
        assert_eq!(Some(outcome), pawn.map(TickOutcome::Selected));
        assert_eq!(state.reachable_blocks(), &[ReachableBlock::empty(Position::new(8, 6))]);
        assert!(knight_blocks
            .iter()
            .all(|b| !state.reachable_blocks().contains(b)));
    }

    #[test]
    fn clicking_an_unreachable_cell_does_not_move() {
        let mut state = GameState::new_game();
        release_at(&mut state, 5, 7);
        assert_eq!(release_at(&mut state, 5, 5), TickOutcome::Deselected);
        assert!(state.piece_at(Position::new(5, 7)).is_some());
        assert_eq!(state.current_player(), Player::White);
    }

    #[test]
    fn turns_alternate_across_moves() {
        let mut state = GameState::new_game();
        for (from, to, mover) in [
            ((5, 7), (5, 6), Player::White),
            ((4, 2), (4, 3), Player::Black),
            ((6, 8), (1, 3), Player::White),
        ] {
            assert_eq!(state.current_player(), mover);
            release_at(&mut state, from.0, from.1);
            let outcome = release_at(&mut state, to.0, to.1);
            assert!(matches!(outcome, TickOutcome::Moved { .. }), "{from:?}->{to:?}");
            assert_eq!(state.current_player(), mover.opposite());
        }
    }

    #[test]
    fn tick_maps_pointer_through_geometry() {
        let geometry = BoardGeometry::default();
        let mut state = GameState::new_game();
        let (x, y) = geometry.block_centre(Position::new(5, 7));
        let outcome = state.tick(
            &geometry,
            &InputFrame {
                pointer: (x, y),
                pressed: false,
                released: true,
            },
        );
        assert!(matches!(outcome, TickOutcome::Selected(_)));
        assert_eq!(state.hovered_cell(), Position::new(5, 7));
    }
}
