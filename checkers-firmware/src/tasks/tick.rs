//! Tick task
//!
//! Drives the cooperative scheduler from a fixed-period ticker and logs
//! what the state machines report. A pass that overruns its tick drops
//! the missed ticks rather than running them back to back.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use checkers_core::scheduler::Scheduler;
use checkers_core::state::{GameEvent, GameState};

use crate::hardware::BoardIo;

/// Tick task - runs every scheduled state machine once per tick
#[embassy_executor::task]
pub async fn tick_task(mut scheduler: Scheduler, mut game: GameState, mut io: BoardIo) {
    let tick = Duration::from_millis(scheduler.tick_ms() as u64);
    info!("Tick task started ({}ms tick)", scheduler.tick_ms());
    for (name, period_ms, state) in scheduler.tasks() {
        debug!("  {}: every {}ms, {:?}", name, period_ms, state);
    }

    let mut ticker = Ticker::every(tick);

    loop {
        ticker.next().await;
        let started = Instant::now();

        let report = scheduler.tick(&mut game, &mut io);
        drain_events(&mut game);

        let elapsed = started.elapsed();
        if elapsed > tick {
            let skipped = elapsed.as_ticks() / tick.as_ticks();
            // Start a fresh period instead of firing the missed ticks at once
            ticker.reset();
            warn!(
                "Tick {} overran: {}ms running {} task(s) ({=u8:#b}), {} tick(s) skipped",
                report.tick,
                elapsed.as_millis(),
                report.count(),
                report.ran,
                skipped
            );
        }
    }
}

/// Log everything the state machines recorded this tick
fn drain_events(game: &mut GameState) {
    while let Some(event) = game.pop_event() {
        match event {
            GameEvent::CursorMoved(pos) => trace!("Cursor -> ({}, {})", pos.col, pos.row),
            GameEvent::PickedUp(pos) => info!("Picked up ({}, {})", pos.col, pos.row),
            GameEvent::Deselected(pos) => info!("Put back ({}, {})", pos.col, pos.row),
            GameEvent::Dropped { from, to } => info!(
                "Moved ({}, {}) -> ({}, {})",
                from.col, from.row, to.col, to.row
            ),
            GameEvent::DropRejected { from, to } => debug!(
                "Drop ({}, {}) -> ({}, {}) rejected",
                from.col, from.row, to.col, to.row
            ),
            GameEvent::Rendered => trace!("Board redrawn"),
            GameEvent::RenderFailed(e) => warn!("Redraw failed: {:?}, retrying", e),
            GameEvent::Winner(side) => info!("{:?} wins", side),
        }
    }
}
