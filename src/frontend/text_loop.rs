//! Line-oriented front-end for playing over stdin/stdout.
//!
//! Each command is one tick of the frame loop: pointer commands feed the
//! state machine, `board` and `draw` run a read-only render pass. Diagnostics
//! are written as `info string ...` lines.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use crate::config::{GameConfig, OPTION_NAMES};
use crate::errors::GameError;
use crate::game_state::chess_types::{PieceKind, Player, Position};
use crate::game_state::game_state::{GameState, TickOutcome};
use crate::input::pointer::PointerTracker;
use crate::render::draw_list::{DrawEntity, FrameRenderer};
use crate::utils::layout_parser::parse_player;
use crate::utils::render_game_state::render_game_state;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = TextSession::new();

    writeln!(stdout, "{}", render_game_state(session.game_state()))?;
    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TextSession {
    game_state: GameState,
    config: GameConfig,
    tracker: PointerTracker,
    renderer: FrameRenderer,
    last_frame: Instant,
    moves_played: u32,
}

impl Default for TextSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSession {
    pub fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
            config: GameConfig::default(),
            tracker: PointerTracker::new(),
            renderer: FrameRenderer::new(),
            last_frame: Instant::now(),
            moves_played: 0,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Handle one command line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let result = match cmd {
            "quit" | "exit" => return Ok(true),
            "click" => self.handle_pointer(&args, true, out),
            "pointer" => self.handle_pointer(&args, false, out),
            "select" | "to" => self.handle_cell(&args, out),
            "board" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
                Ok(())
            }
            "draw" => {
                self.handle_draw(out)?;
                Ok(())
            }
            "status" => {
                self.write_status(out)?;
                Ok(())
            }
            "newgame" => {
                self.game_state = GameState::new_game();
                self.moves_played = 0;
                writeln!(out, "{}", render_game_state(&self.game_state))?;
                Ok(())
            }
            "layout" => self.handle_layout(&args, out),
            "setoption" => self.handle_setoption(trimmed),
            "options" => {
                for name in OPTION_NAMES {
                    writeln!(out, "option name {name}")?;
                }
                Ok(())
            }
            _ => Err(GameError::MalformedCommand(trimmed.to_owned())),
        };

        if let Err(err) = result {
            writeln!(out, "info string {cmd} error: {err}")?;
        }
        Ok(false)
    }

    fn handle_pointer(
        &mut self,
        args: &[&str],
        release: bool,
        out: &mut impl Write,
    ) -> Result<(), GameError> {
        let (x, y) = parse_pair::<f32>(args)?;
        let frame = if release {
            self.tracker.click((x, y))
        } else {
            self.tracker.sample((x, y), false)
        };
        let outcome = self
            .game_state
            .tick(&self.config.effective_geometry(), &frame);
        self.report(outcome, out).map_err(output_error)
    }

    fn handle_cell(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), GameError> {
        let (file, rank) = parse_pair::<i8>(args)?;
        let outcome = self.game_state.update(Position::new(file, rank), true);
        self.report(outcome, out).map_err(output_error)
    }

    fn handle_layout(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), GameError> {
        let placement = args
            .first()
            .ok_or_else(|| GameError::MalformedCommand("layout needs a placement".to_owned()))?;
        let to_move = match args.get(1) {
            Some(text) => parse_player(text)?,
            None => Player::White,
        };
        self.game_state = GameState::from_layout(placement, to_move)?;
        self.moves_played = 0;
        writeln!(out, "{}", render_game_state(&self.game_state)).map_err(output_error)
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), GameError> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in tokens {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        if name_tokens.is_empty() {
            return Err(GameError::MalformedCommand(line.to_owned()));
        }
        self.config
            .set_option(&name_tokens.join(" "), &value_tokens.join(" "))
    }

    fn handle_draw(&mut self, out: &mut impl Write) -> io::Result<()> {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).min(Duration::from_secs(1));
        self.last_frame = now;

        let list = self
            .renderer
            .render(&self.game_state, &self.config, frame_time);
        for entity in &list.entities {
            match entity {
                DrawEntity::Board { .. } => writeln!(out, "draw board")?,
                DrawEntity::Piece {
                    kind,
                    owner,
                    position,
                    ..
                } => writeln!(
                    out,
                    "draw piece {} {} at {:.0} {:.0}",
                    owner.number(),
                    kind.name(),
                    position.0,
                    position.1
                )?,
                DrawEntity::HoverHighlight {
                    cell, intensity, ..
                } => writeln!(out, "draw hover {cell} intensity {intensity:.2}")?,
                DrawEntity::SelectedBlock { cell, .. } => writeln!(out, "draw selected {cell}")?,
                DrawEntity::ReachableBlock { cell, kind, .. } => {
                    writeln!(out, "draw reachable {cell} {kind:?}")?
                }
                DrawEntity::Glyph { .. } => {}
            }
        }
        writeln!(out, "draw text {}", list.text())?;
        for ch in list.missing_glyphs {
            writeln!(out, "info string glyph '{ch}' not found in font sheet")?;
        }
        Ok(())
    }

    fn write_status(&self, out: &mut impl Write) -> io::Result<()> {
        let state = &self.game_state;
        writeln!(out, "info string to_move {}", state.current_player())?;
        writeln!(out, "info string pieces {}", state.pieces().len())?;
        writeln!(out, "info string moves_played {}", self.moves_played)?;
        writeln!(out, "info string layout {}", state.layout())?;
        match state.selected_piece() {
            Some(piece) => writeln!(
                out,
                "info string selected {} {} reachable {}",
                piece.kind.name(),
                piece.position,
                state.reachable_blocks().len()
            ),
            None => writeln!(out, "info string selected none"),
        }
    }

    fn report(&mut self, outcome: TickOutcome, out: &mut impl Write) -> io::Result<()> {
        match outcome {
            TickOutcome::Idle => Ok(()),
            TickOutcome::Deselected => writeln!(out, "info string deselected"),
            TickOutcome::Selected(id) => {
                let Some(piece) = self.game_state.piece(id) else {
                    return Ok(());
                };
                let cells: Vec<String> = self
                    .game_state
                    .reachable_blocks()
                    .iter()
                    .map(|b| b.position.to_string())
                    .collect();
                writeln!(
                    out,
                    "info string selected {} {} reachable {}",
                    piece.kind.name(),
                    piece.position,
                    cells.join(" ")
                )
            }
            TickOutcome::Moved {
                from, to, captured, ..
            } => {
                self.moves_played += 1;
                writeln!(out, "info string moved {from} -> {to}")?;
                if let Some(victim) = captured {
                    writeln!(
                        out,
                        "info string captured {} {}",
                        victim.owner,
                        victim.kind.name()
                    )?;
                    if victim.kind == PieceKind::King {
                        writeln!(out, "info string {} king captured", victim.owner)?;
                    }
                }
                writeln!(out, "{}", render_game_state(&self.game_state))
            }
        }
    }
}

fn parse_pair<T: std::str::FromStr>(args: &[&str]) -> Result<(T, T), GameError> {
    let malformed = || GameError::MalformedCommand(args.join(" "));
    match args {
        [a, b] => Ok((
            a.parse::<T>().map_err(|_| malformed())?,
            b.parse::<T>().map_err(|_| malformed())?,
        )),
        _ => Err(malformed()),
    }
}

fn output_error(err: io::Error) -> GameError {
    GameError::Output(err.to_string())
}
