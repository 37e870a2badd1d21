//! Repeating trigger components for emitters.
//!
//! Both triggers share one contract: `run()` arms, `stop()` disarms
//! deterministically (no fire is observable after `stop()` returns), and the
//! owner's system calls `tick` with frame delta time and reacts to the
//! result. Firing here means returning a count/flag; translating that into a
//! spawn-request message is the owning system's job.
//!
//! These are explicit tick-driven state machines, not scheduled tasks: the
//! whole crate runs on cooperative frame updates, so a trigger is just data
//! advanced by whoever owns it.

use std::time::Duration;

use bevy::prelude::*;

/// Fires immediately when armed, then once per interval.
#[derive(Component, Debug, Clone)]
pub struct PeriodicTrigger {
    timer: Timer,
    running: bool,
    primed: bool,
}

impl PeriodicTrigger {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval_secs, TimerMode::Repeating),
            running: false,
            primed: false,
        }
    }

    /// Arm the trigger. The next `tick` fires regardless of elapsed time.
    pub fn run(&mut self) {
        self.running = true;
        self.primed = true;
        self.timer.reset();
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.primed = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by `dt`; returns how many fires elapsed. A large `dt` spanning
    /// several intervals reports every missed fire.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        let mut fires = 0;
        if self.primed {
            self.primed = false;
            fires += 1;
        }

        self.timer.tick(dt);
        fires + self.timer.times_finished_this_tick()
    }
}

/// Fires at most once per interval, and only if the gate condition has been
/// latched since the last fire.
///
/// The gate stays latched while the cooldown runs, so a condition met
/// mid-interval produces a fire as soon as the interval elapses. A fire
/// consumes the latch; with no new `open_gate` the trigger goes quiet.
#[derive(Component, Debug, Clone)]
pub struct GatedTrigger {
    cooldown: Timer,
    gate: bool,
    running: bool,
}

impl GatedTrigger {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            cooldown: Timer::from_seconds(interval_secs, TimerMode::Once),
            gate: false,
            running: false,
        }
    }

    /// Latch the gate condition. Stays latched until consumed by a fire.
    pub fn open_gate(&mut self) {
        self.gate = true;
    }

    pub fn is_gate_open(&self) -> bool {
        self.gate
    }

    /// Arm the trigger; the first fire comes no earlier than one interval
    /// after arming.
    pub fn run(&mut self) {
        self.running = true;
        self.cooldown.reset();
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.gate = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by `dt`; returns true when a gated fire elapses. The fire
    /// consumes the gate and restarts the cooldown.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }

        self.cooldown.tick(dt);
        if self.gate && self.cooldown.is_finished() {
            self.gate = false;
            self.cooldown.reset();
            true
        } else {
            false
        }
    }
}
