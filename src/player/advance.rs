//! Simulated time: buffering, play head motion, looping and failure.
//!
//! One `advance_time` call reports exactly one event. Buffering and playback
//! never share a call: the call that finishes buffering stops there, even if
//! budget is left over.

use log::{debug, info};

use super::fake::FakePlayer;
use super::track::RepeatCount;
use super::types::{Advance, PlayerEvent, PlayerState};

impl FakePlayer {
    /// Advance time by at most `max` milliseconds, taking buffering, loops and
    /// the failure point into account.
    ///
    /// Returns the event that stopped time and how much time actually passed.
    pub fn advance_time(&mut self, max: u64) -> Advance {
        if !self.ready_dispatched {
            return self.advance_buffering(max);
        }
        if self.state != PlayerState::Playing {
            return Advance::new(PlayerEvent::NoReport, max);
        }
        self.advance_playback(max)
    }

    fn advance_buffering(&mut self, max: u64) -> Advance {
        let used = self.buffering.min(max);
        self.buffering -= used;
        if self.buffering > 0 {
            return Advance::new(PlayerEvent::NoReport, max);
        }

        self.ready_dispatched = true;
        if self.is_active() && self.failure_due() {
            self.fail();
            return Advance::new(PlayerEvent::TrackFail, used);
        }
        debug!("fake player: ready after {used} ms of buffering");
        Advance::new(PlayerEvent::TrackReady, used)
    }

    fn advance_playback(&mut self, max: u64) -> Advance {
        // Nothing to play: straight to done, repeats ignored.
        if self.duration == Some(0) {
            if self.failure_due() {
                self.fail();
                return Advance::new(PlayerEvent::TrackFail, 0);
            }
            self.position = self.start;
            self.mark_done();
            return Advance::new(PlayerEvent::TrackDone, 0);
        }

        let mut consumed = 0;
        loop {
            let budget = max - consumed;
            let until_end = self.end().map(|end| end - self.position);

            // Failure wins a tie with the end of the window.
            if let Some(until_fail) = self.fail_after.map(|f| f.saturating_sub(self.elapsed)) {
                if until_fail <= budget && until_end.is_none_or(|u| until_fail <= u) {
                    self.move_head(until_fail);
                    self.fail();
                    return Advance::new(PlayerEvent::TrackFail, consumed + until_fail);
                }
            }

            match until_end {
                Some(until_end) if until_end <= budget => {
                    self.move_head(until_end);
                    consumed += until_end;
                    if !self.repeats_remaining() {
                        self.mark_done();
                        return Advance::new(PlayerEvent::TrackDone, consumed);
                    }
                    self.completed_loops = self.completed_loops.saturating_add(1);
                    self.position = self.start;
                    consumed += self.skip_whole_passes(max - consumed);
                }
                _ => {
                    self.move_head(budget);
                    return Advance::new(PlayerEvent::TimeUpdate, max);
                }
            }
        }
    }

    /// With the play head at `start`, jump over every complete pass that fits
    /// in `budget` and is neither the last permitted one nor cut short by the
    /// failure point. Returns the time skipped.
    fn skip_whole_passes(&mut self, budget: u64) -> u64 {
        let Some(length) = self.duration.filter(|&d| d > 0) else {
            return 0;
        };

        let mut passes = budget / length;
        if let RepeatCount::Times(k) = self.repeat_count {
            let loops_left = u64::from(k).saturating_sub(self.completed_loops + 1);
            passes = passes.min(loops_left);
        }
        if let Some(until_fail) = self.fail_after.map(|f| f.saturating_sub(self.elapsed)) {
            passes = passes.min(until_fail.saturating_sub(1) / length);
        }

        let skipped = passes * length;
        self.completed_loops = self.completed_loops.saturating_add(passes);
        self.elapsed = self.elapsed.saturating_add(skipped);
        skipped
    }

    fn move_head(&mut self, ms: u64) {
        self.position = self.position.saturating_add(ms);
        self.elapsed = self.elapsed.saturating_add(ms);
    }

    fn failure_due(&self) -> bool {
        self.fail_after.is_some_and(|f| self.elapsed >= f)
    }

    fn fail(&mut self) {
        info!(
            "fake player: failed after {} ms of playback at position {}",
            self.elapsed, self.position
        );
        self.set_state(PlayerState::Failed);
    }
}
