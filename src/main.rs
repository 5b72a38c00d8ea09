//! Terminal match-3 runner (default binary).
//!
//! Press and drag with the mouse to chain same-type pieces, release to clear.
//! `r` resets the board, `q` quits. Configuration comes from `MATCH3_*`
//! environment variables; `MATCH3_LOG_PATH` enables the event journal.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, terminal, QueueableCommand};

use match3_board::core::{Board, BoardConfig, InputOutcome, ReleaseOutcome};
use match3_board::input::{is_reset, should_quit, CellHitMap, PointerTracker};
use match3_board::types::Coord;
use match3_board::Journal;

/// Terminal columns per board cell.
const CELL_W: u16 = 3;
const ORIGIN_COL: u16 = 2;
const ORIGIN_ROW: u16 = 2;

type Matches = Rc<RefCell<Vec<(String, usize)>>>;

fn main() -> Result<()> {
    let config = BoardConfig::from_env()?;
    let journal = Journal::from_env()?;

    let matches: Matches = Rc::new(RefCell::new(Vec::new()));
    let sink = matches.clone();
    let mut board = Board::new(config, journal)?;
    board.register_observer(move |name: &str, count: usize| {
        sink.borrow_mut().push((name.to_string(), count));
    });

    let mut stdout = io::stdout();
    enter(&mut stdout)?;
    let result = run(&mut board, &mut stdout, &matches);
    // Always try to restore terminal state.
    let _ = exit(&mut stdout);

    board.sink_mut().flush()?;
    for (name, count) in matches.borrow().iter() {
        eprintln!("[Match] {} x{}", name, count);
    }
    result
}

fn enter(out: &mut io::Stdout) -> Result<()> {
    terminal::enable_raw_mode()?;
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(EnableMouseCapture)?;
    out.queue(cursor::Hide)?;
    out.flush()?;
    Ok(())
}

fn exit(out: &mut io::Stdout) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(cursor::Show)?;
    out.queue(DisableMouseCapture)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    out.flush()?;
    terminal::disable_raw_mode()?;
    Ok(())
}

fn run(board: &mut Board<Journal>, out: &mut io::Stdout, matches: &Matches) -> Result<()> {
    let (width, height) = (board.width(), board.height());
    let hits = CellHitMap::new(ORIGIN_COL, ORIGIN_ROW, CELL_W, 1, width, height);
    let mut tracker = PointerTracker::new();
    let mut status = String::from("drag to chain, release to clear");

    loop {
        draw(board, &hits, &status, out)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if is_reset(key) {
                    board.reset();
                    status = String::from("board reset");
                }
            }
            Event::Mouse(mouse) => {
                if let Some(input) = tracker.handle_mouse(mouse, &hits) {
                    match board.handle_input(input) {
                        InputOutcome::Release(ReleaseOutcome::Resolved(result)) => {
                            status = format!(
                                "cleared {} x{} ({} total)",
                                result.name,
                                result.count,
                                matches.borrow().len()
                            );
                        }
                        InputOutcome::Release(ReleaseOutcome::Cancelled { count }) => {
                            status = format!("chain of {} is too short", count);
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
}

fn draw(
    board: &Board<Journal>,
    hits: &CellHitMap,
    status: &str,
    out: &mut io::Stdout,
) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print("match3  [r] reset  [q] quit"))?;

    for y in 0..board.height() {
        for x in 0..board.width() {
            let Some((col, row)) = hits.screen_at(x, y) else {
                continue;
            };
            let c = Coord::new(x, y);
            let glyph = board
                .piece_at(c)
                .and_then(|p| board.catalog().name(p.kind).chars().next())
                .map(|ch| ch.to_ascii_uppercase())
                .unwrap_or('.');

            out.queue(cursor::MoveTo(col, row))?;
            if board.is_selected(c) {
                out.queue(SetAttribute(Attribute::Reverse))?;
            } else if board.is_external(c) {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            out.queue(Print(format!(" {} ", glyph)))?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
    }

    let status_row = ORIGIN_ROW + board.height().max(0) as u16 + 1;
    out.queue(cursor::MoveTo(0, status_row))?;
    out.queue(Print(status))?;
    out.flush()?;
    Ok(())
}
