//! Game lifecycle: start, phase changes, reset, and the elapsed-time view.

use crate::error::ConsoleError;
use crate::game::console::Console;

/// Elapsed times shown by the header timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub game_elapsed_ms: i64,
    pub phase_elapsed_ms: i64,
    pub phase: u32,
}

impl Console {
    pub(crate) fn require_started(&self) -> Result<(), ConsoleError> {
        if self.store.load().game_started {
            Ok(())
        } else {
            Err(ConsoleError::NotStarted)
        }
    }

    /// Start the session: both timers from now, phase 1, every declared
    /// condition reset to `false`.
    pub fn start_game(&mut self) {
        let now = self.clock.now_ms();
        let names: Vec<String> = self.catalogs.conditions.iter().map(|c| c.name.clone()).collect();
        self.store.update(|s| {
            s.game_started = true;
            s.start_time = Some(now);
            s.phase_start_time = Some(now);
            s.current_phase = 1;
            s.conditions = names.into_iter().map(|n| (n, false)).collect();
        });
        tracing::info!(start_time = now, "game started");
    }

    /// Advance one phase and restart the phase timer. Returns the new phase.
    pub fn next_phase(&mut self) -> Result<u32, ConsoleError> {
        self.require_started()?;
        let now = self.clock.now_ms();
        let phase = self.store.update(|s| {
            s.current_phase = s.current_phase.saturating_add(1);
            s.phase_start_time = Some(now);
            s.current_phase
        });
        tracing::info!(phase, "phase advanced");
        Ok(phase)
    }

    /// Go back one phase. Refused at phase 1, leaving the state untouched.
    pub fn previous_phase(&mut self) -> Result<u32, ConsoleError> {
        self.require_started()?;
        let mut state = self.store.load();
        if state.current_phase <= 1 {
            tracing::debug!("phase decrement refused at phase 1");
            return Err(ConsoleError::PhaseFloor);
        }
        state.current_phase -= 1;
        state.phase_start_time = Some(self.clock.now_ms());
        self.store.save(&state);
        tracing::info!(phase = state.current_phase, "phase decremented");
        Ok(state.current_phase)
    }

    /// Erase the session record entirely.
    pub fn reset_game(&mut self) {
        self.store.reset();
        tracing::info!("game reset");
    }

    /// Elapsed times; zero while the game is not running.
    pub fn timer(&self) -> TimerSnapshot {
        let state = self.store.load();
        let now = self.clock.now_ms();
        match (state.game_started, state.start_time, state.phase_start_time) {
            (true, Some(start), Some(phase_start)) => TimerSnapshot {
                game_elapsed_ms: (now - start).max(0),
                phase_elapsed_ms: (now - phase_start).max(0),
                phase: state.current_phase,
            },
            _ => TimerSnapshot {
                game_elapsed_ms: 0,
                phase_elapsed_ms: 0,
                phase: state.current_phase,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::CatalogKind;
    use crate::game::clock::FixedClock;

    fn console_at(clock: &FixedClock) -> Console {
        Console::with_seed(Box::new(clock.clone()), 7)
    }

    #[test]
    fn start_initialises_session() {
        let clock = FixedClock::at(5_000);
        let mut c = console_at(&clock);
        c.load_catalog(CatalogKind::Conditions, r#"[{"name":"door_open","description":""}]"#)
            .unwrap();
        c.set_condition("door_open", true);
        c.set_condition("stale", true);
        c.start_game();
        let s = c.state();
        assert!(s.game_started);
        assert_eq!(s.start_time, Some(5_000));
        assert_eq!(s.phase_start_time, Some(5_000));
        assert_eq!(s.current_phase, 1);
        assert_eq!(s.condition("door_open"), Some(false));
        assert_eq!(s.condition("stale"), None);
    }

    #[test]
    fn phase_changes_restart_phase_timer() {
        let clock = FixedClock::at(0);
        let mut c = console_at(&clock);
        c.start_game();
        clock.advance(60_000);
        assert_eq!(c.next_phase().unwrap(), 2);
        clock.advance(30_000);
        let t = c.timer();
        assert_eq!(t.phase, 2);
        assert_eq!(t.game_elapsed_ms, 90_000);
        assert_eq!(t.phase_elapsed_ms, 30_000);
        assert_eq!(c.previous_phase().unwrap(), 1);
        assert_eq!(c.timer().phase_elapsed_ms, 0);
    }

    #[test]
    fn decrement_below_one_is_rejected() {
        let clock = FixedClock::at(0);
        let mut c = console_at(&clock);
        c.start_game();
        let before = c.state();
        assert!(matches!(c.previous_phase(), Err(ConsoleError::PhaseFloor)));
        assert_eq!(c.state(), before);
    }

    #[test]
    fn phase_changes_need_a_started_game() {
        let mut c = Console::for_tests();
        assert!(matches!(c.next_phase(), Err(ConsoleError::NotStarted)));
        assert_eq!(c.state().current_phase, 1);
    }

    #[test]
    fn timer_is_zero_before_start() {
        let c = Console::for_tests();
        let t = c.timer();
        assert_eq!(t.game_elapsed_ms, 0);
        assert_eq!(t.phase_elapsed_ms, 0);
        assert_eq!(t.phase, 1);
    }

    #[test]
    fn reset_reverts_to_defaults() {
        let mut c = Console::for_tests();
        c.start_game();
        c.next_phase().unwrap();
        c.reset_game();
        assert!(c.store().raw_record().is_none());
        assert!(!c.state().game_started);
        assert_eq!(c.state().current_phase, 1);
    }

    #[test]
    fn next_phase_saturates_at_the_top() {
        let mut c = Console::for_tests();
        c.store_mut()
            .restore_raw(r#"{"gameStarted":true,"currentPhase":4294967295}"#)
            .unwrap();
        assert_eq!(c.next_phase().unwrap(), u32::MAX);
        assert_eq!(c.state().current_phase, u32::MAX);
    }
}
