//! Bot Lifecycle
//!
//! The run/stop toggle gating whether monitoring is considered active.
//! Transitions are synchronous and atomic from the caller's perspective;
//! there are no transient starting/stopping states, timers, or retries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status message shown when the bot starts.
pub const STARTED_MESSAGE: &str = "Sniper bot is now monitoring for new tokens.";

/// Status message shown when the bot stops.
pub const STOPPED_MESSAGE: &str = "Sniper bot has been stopped successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotState {
    Stopped,
    Running,
}

impl BotState {
    pub fn is_running(&self) -> bool {
        matches!(self, BotState::Running)
    }

    /// Human-readable label for the status badge.
    pub fn description(&self) -> &'static str {
        match self {
            BotState::Stopped => "Stopped - start to begin monitoring",
            BotState::Running => "Running - monitoring for new tokens",
        }
    }
}

impl fmt::Display for BotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotState::Stopped => write!(f, "Stopped"),
            BotState::Running => write!(f, "Running"),
        }
    }
}

/// A state transition that actually happened. No-op calls produce none.
#[derive(Debug, Clone, PartialEq)]
pub struct StateChange {
    pub from: BotState,
    pub to: BotState,
    pub message: &'static str,
    pub at: DateTime<Utc>,
}

/// User-driven run/stop state machine. Exactly one state at any instant.
#[derive(Debug)]
pub struct BotLifecycle {
    state: BotState,
    since: Option<DateTime<Utc>>,
}

impl Default for BotLifecycle {
    fn default() -> Self {
        Self {
            state: BotState::Stopped,
            since: None,
        }
    }
}

impl BotLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BotState {
        self.state
    }

    /// When the current run began. None while stopped.
    pub fn running_since(&self) -> Option<DateTime<Utc>> {
        self.since
    }

    /// STOPPED -> RUNNING. Returns None (and changes nothing) if already
    /// running.
    pub fn start(&mut self) -> Option<StateChange> {
        if self.state.is_running() {
            return None;
        }
        let at = Utc::now();
        self.state = BotState::Running;
        self.since = Some(at);
        Some(StateChange {
            from: BotState::Stopped,
            to: BotState::Running,
            message: STARTED_MESSAGE,
            at,
        })
    }

    /// RUNNING -> STOPPED. Returns None (and changes nothing) if already
    /// stopped.
    pub fn stop(&mut self) -> Option<StateChange> {
        if !self.state.is_running() {
            return None;
        }
        let at = Utc::now();
        self.state = BotState::Stopped;
        self.since = None;
        Some(StateChange {
            from: BotState::Running,
            to: BotState::Stopped,
            message: STOPPED_MESSAGE,
            at,
        })
    }
}
