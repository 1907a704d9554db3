//! Demo ticker: simulated agent status and rotating activity feed
//!
//! Presentation only. Nothing here touches domain records; the cursors just
//! make repeated polls of the dashboard look alive.

use serde::Serialize;
use shared_types::ActivityItem;

/// Base value for the "actions today" counter
const BASE_ACTIONS_TODAY: u32 = 47;

/// Simulated agent response time shown on every status read
const RESPONSE_TIME_SECONDS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgentStatus {
    Active,
    Processing,
    Idle,
}

impl AgentStatus {
    /// Order the status chip cycles through
    pub const CYCLE: [AgentStatus; 3] = [AgentStatus::Active, AgentStatus::Processing, AgentStatus::Idle];

    /// Key into the label pack
    pub fn label_key(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Processing => "processing",
            AgentStatus::Idle => "idle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentState {
    pub status: AgentStatus,
    pub actions_today: u32,
    pub response_time_seconds: u32,
}

#[derive(Debug, Default)]
pub struct DemoTicker {
    status_cursor: usize,
    activity_cursor: usize,
}

impl DemoTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the status cycle and report the new state
    pub fn next_agent_state(&mut self) -> AgentState {
        self.status_cursor = (self.status_cursor + 1) % AgentStatus::CYCLE.len();
        AgentState {
            status: AgentStatus::CYCLE[self.status_cursor],
            actions_today: BASE_ACTIONS_TODAY + self.status_cursor as u32,
            response_time_seconds: RESPONSE_TIME_SECONDS,
        }
    }

    /// Take `limit` items from the log starting at the cursor, wrapping
    /// around, then move the cursor one step.
    pub fn activity_slice(&mut self, log: &[ActivityItem], limit: usize) -> Vec<ActivityItem> {
        if log.is_empty() {
            return Vec::new();
        }
        let start = self.activity_cursor % log.len();
        let items = (0..limit)
            .map(|offset| log[(start + offset) % log.len()].clone())
            .collect();
        self.activity_cursor = (start + 1) % log.len();
        items
    }
}
