//! Board engine - selection state machine, clearing, compaction and refill
//!
//! States: `Idle` (no gesture) -> `Selecting` (pointer down, chain growing or
//! shrinking) -> `Resolving` (clear, compact, refill; runs to completion
//! inside [`Board::release_pointer`]) -> `Idle`.
//!
//! The board owns the grid and the chain exclusively. Everything visual is
//! handed to the [`RenderSink`] as intents; the board never waits on them.

use rand::RngCore;

use crate::catalog::Catalog;
use crate::chain::SelectionChain;
use crate::config::BoardConfig;
use crate::error::ConfigError;
use crate::grid::{Grid, Piece};
use crate::layout::Layout;
use crate::rng::{entropy_rng, seeded_rng, BoardRng};
use crate::sink::{MatchObserver, NullSink, RenderSink};
use crate::snapshot::BoardSnapshot;
use crate::style::PieceStyle;
use crate::types::{Coord, Direction, InputEvent, PieceId, PieceTypeId, RenderEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Selecting,
    Resolving,
}

/// Result of pressing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// First piece of a new chain.
    Started,
    /// Chain grew; the direction is the drag direction.
    Extended(Direction),
    /// The second-to-last piece was pressed; the last one was dropped.
    Backtracked,
    /// The chain's last piece was pressed again.
    Repeated,
    /// Wrong type, not adjacent, already chained, or not a piece.
    Rejected,
}

impl PressOutcome {
    /// True when the chain changed.
    pub fn is_accepted(self) -> bool {
        matches!(
            self,
            PressOutcome::Started | PressOutcome::Extended(_) | PressOutcome::Backtracked
        )
    }
}

/// A successful clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub piece_type: PieceTypeId,
    pub name: String,
    pub count: usize,
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No gesture was active.
    Idle,
    /// Chain was shorter than the minimum and was dropped.
    Cancelled { count: usize },
    Resolved(MatchResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    Press(PressOutcome),
    Release(ReleaseOutcome),
}

pub struct Board<S = NullSink, R = BoardRng> {
    config: BoardConfig,
    catalog: Catalog,
    grid: Grid,
    chain: SelectionChain,
    phase: Phase,
    /// Type currently used to mark externals, if marked.
    marked: Option<PieceTypeId>,
    next_piece_id: u32,
    rng: R,
    sink: S,
    observer: Option<Box<dyn MatchObserver>>,
}

impl<S: RenderSink> Board<S, BoardRng> {
    /// Validate `config` and fill a new board.
    ///
    /// Uses `config.seed` when set, OS entropy otherwise.
    pub fn new(config: BoardConfig, sink: S) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => seeded_rng(seed),
            None => entropy_rng(),
        };
        Self::with_rng(config, sink, rng)
    }
}

impl<S: RenderSink, R: RngCore> Board<S, R> {
    /// Validate `config` and fill a new board drawing from `rng`.
    pub fn with_rng(config: BoardConfig, sink: S, rng: R) -> Result<Self, ConfigError> {
        config.validate_board()?;
        let catalog = config.catalog()?;

        let mut board = Self {
            grid: Grid::new(config.width, config.height),
            config,
            catalog,
            chain: SelectionChain::new(),
            phase: Phase::Idle,
            marked: None,
            next_piece_id: 0,
            rng,
            sink,
            observer: None,
        };
        board.reset();
        Ok(board)
    }

    /// Attach the match observer.
    pub fn with_observer(mut self, observer: impl MatchObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Replace the match observer.
    pub fn register_observer(&mut self, observer: impl MatchObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Destroy every piece and refill the board from scratch.
    ///
    /// An active gesture is abandoned without a callback.
    pub fn reset(&mut self) {
        self.unmark_externals();
        self.chain.drain();

        let existing: Vec<(Coord, PieceId)> =
            self.grid.pieces().map(|(c, p)| (c, p.id)).collect();
        for (cell, id) in existing {
            self.sink.emit(RenderEvent::PieceCleared { id, cell });
        }
        self.grid.clear();

        let fall_from = self
            .config
            .animate_on_start
            .then_some(self.config.start_position);
        let coords: Vec<Coord> = self.grid.coords().collect();
        for c in coords {
            self.spawn(c, fall_from);
        }
        self.phase = Phase::Idle;
    }

    /// Route a discrete input event.
    pub fn handle_input(&mut self, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::PointerDown { x, y } => InputOutcome::Press(self.press_cell(x, y)),
            InputEvent::PointerUp => InputOutcome::Release(self.release_pointer()),
        }
    }

    /// Pointer is down over cell `(x, y)`.
    ///
    /// Never fails: presses that cannot change the chain are rejected
    /// without touching any state.
    pub fn press_cell(&mut self, x: i32, y: i32) -> PressOutcome {
        if self.phase == Phase::Resolving {
            return PressOutcome::Rejected;
        }
        let c = Coord::new(x, y);
        let Some(kind) = self.grid.piece(c).map(|p| p.kind) else {
            return PressOutcome::Rejected;
        };

        let Some(last) = self.chain.last() else {
            self.chain.push(c, kind);
            self.select(c, Direction::Initial);
            self.phase = Phase::Selecting;
            self.mark_externals();
            return PressOutcome::Started;
        };

        if last == c {
            return PressOutcome::Repeated;
        }

        if self.chain.previous() == Some(c) {
            if let Some(dropped) = self.chain.pop() {
                self.deselect(dropped);
            }
            self.mark_externals();
            return PressOutcome::Backtracked;
        }

        if self.chain.contains(c) || self.chain.kind() != Some(kind) {
            return PressOutcome::Rejected;
        }

        // Only neighbours of the last piece have a compass direction.
        let Some(direction) = Direction::between(last, c) else {
            return PressOutcome::Rejected;
        };

        self.chain.push(c, kind);
        self.select(c, direction);
        self.mark_externals();
        PressOutcome::Extended(direction)
    }

    /// Pointer released: resolve a long enough chain, drop a short one.
    pub fn release_pointer(&mut self) -> ReleaseOutcome {
        if self.chain.is_empty() {
            self.phase = Phase::Idle;
            return ReleaseOutcome::Idle;
        }

        self.unmark_externals();

        if self.chain.len() < self.config.minimum_touch_limit {
            let cells = self.chain.drain();
            let count = cells.len();
            for c in cells {
                self.deselect(c);
            }
            self.phase = Phase::Idle;
            return ReleaseOutcome::Cancelled { count };
        }

        ReleaseOutcome::Resolved(self.resolve())
    }

    fn resolve(&mut self) -> MatchResult {
        self.phase = Phase::Resolving;

        let kind = self.chain.kind().unwrap_or(PieceTypeId(0));
        let cleared = self.chain.drain();
        let count = cleared.len();

        for &cell in &cleared {
            if let Some(piece) = self.grid.take(cell) {
                self.sink.emit(RenderEvent::PieceCleared { id: piece.id, cell });
            }
        }

        for x in 0..self.grid.width() {
            for fall in self.grid.compact_column(x) {
                self.sink.emit(RenderEvent::PieceMoved {
                    id: fall.id,
                    column: fall.column,
                    from_y: fall.from_y,
                    to_y: fall.to_y,
                });
            }
        }

        let start = self.config.start_position;
        let coords: Vec<Coord> = self.grid.coords().collect();
        for c in coords {
            if !self.grid.is_occupied(c) {
                self.spawn(c, Some(start));
            }
        }

        let result = MatchResult {
            piece_type: kind,
            name: self.catalog.name(kind).to_owned(),
            count,
        };
        if let Some(observer) = self.observer.as_mut() {
            observer.on_match(&result.name, result.count);
        }

        self.phase = Phase::Idle;
        result
    }

    fn spawn(&mut self, cell: Coord, fall_from: Option<f32>) {
        let kind = self.catalog.draw(&mut self.rng);
        let id = PieceId(self.next_piece_id);
        self.next_piece_id = self.next_piece_id.wrapping_add(1);

        self.grid.set(cell, Some(Piece::new(id, kind)));
        self.sink.emit(RenderEvent::PieceSpawned {
            id,
            cell,
            piece_type: kind,
            fall_from,
        });
    }

    fn select(&mut self, cell: Coord, direction: Direction) {
        if let Some(piece) = self.grid.piece_mut(cell) {
            piece.selected = true;
        }
        self.sink.emit(RenderEvent::PieceSelected { cell, direction });
    }

    fn deselect(&mut self, cell: Coord) {
        if let Some(piece) = self.grid.piece_mut(cell) {
            piece.selected = false;
        }
        self.sink.emit(RenderEvent::PieceDeselected {
            cell,
            direction: Direction::Reset,
        });
    }

    /// Recompute external flags from scratch against the chain's type.
    fn mark_externals(&mut self) {
        if !self.config.toggle_other_tiles {
            return;
        }
        let Some(kind) = self.chain.kind() else {
            self.unmark_externals();
            return;
        };
        for piece in self.grid.pieces_mut() {
            piece.external = piece.kind != kind;
        }
        self.marked = Some(kind);
        self.sink.emit(RenderEvent::ExternalsMarked { piece_type: kind });
    }

    fn unmark_externals(&mut self) {
        if self.marked.take().is_none() {
            return;
        }
        for piece in self.grid.pieces_mut() {
            piece.external = false;
        }
        self.sink.emit(RenderEvent::ExternalsUnmarked);
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn chain(&self) -> &SelectionChain {
        &self.chain
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn piece_at(&self, c: Coord) -> Option<&Piece> {
        self.grid.piece(c)
    }

    pub fn is_selected(&self, c: Coord) -> bool {
        self.grid.piece(c).map(|p| p.selected).unwrap_or(false)
    }

    pub fn is_external(&self, c: Coord) -> bool {
        self.grid.piece(c).map(|p| p.external).unwrap_or(false)
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.grid.width(), self.grid.height(), self.config.spacing)
    }

    /// Effective style of the piece at `c`: per-type overrides over the
    /// board-wide defaults.
    pub fn style_of(&self, c: Coord) -> Option<PieceStyle> {
        let piece = self.grid.piece(c)?;
        let defaults = self.config.default_style();
        let ty = self.catalog.get(piece.kind)?;
        Some(PieceStyle {
            touch: ty.touch.unwrap_or(defaults.touch),
            animation: ty.animation.unwrap_or(defaults.animation),
        })
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            cells: self.grid.cells().iter().map(|c| c.map(|p| p.kind)).collect(),
            selected: self.chain.cells().to_vec(),
            phase: self.phase,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
