//! Per-table detail panels and the session that tags their fetches.
//!
//! Every table selection opens a new session. Responses carry the session they
//! were requested under and are only applied while that session is current.

use crate::detail_tab::DetailTab;
use crate::load_state::Panel;
use lakeview_domain::{PreviewResult, QueryOutcome, TableInfo, TableStatistics};

/// Opaque token identifying one detail-load sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey(u64);

impl SessionKey {
    #[cfg(test)]
    pub fn for_test(raw: u64) -> Self {
        Self(raw)
    }
}

/// Idle → LoadingInfo → LoadingPreview → Ready, or Failed from either loading phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    LoadingInfo,
    LoadingPreview,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPanel {
    pub text: String,
    pub running: bool,
    pub result: Option<QueryOutcome>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsPanel {
    pub loading: bool,
    pub data: Option<TableStatistics>,
}

#[derive(Debug, Clone, Default)]
pub struct DetailState {
    last_session: u64,
    session: Option<SessionKey>,
    pub phase: SessionPhase,
    /// Info and schema both render from this payload
    pub info: Panel<TableInfo>,
    pub preview: Panel<PreviewResult>,
    preview_request: u64,
    pub preview_limit: u32,
    pub query: QueryPanel,
    pub statistics: StatisticsPanel,
    pub tab: DetailTab,
}

impl DetailState {
    pub fn new(preview_limit: u32) -> Self {
        Self {
            preview_limit,
            ..Default::default()
        }
    }

    /// Supersedes the current session and resets every panel.
    /// The query text is kept so it can be re-run against the new table.
    pub fn begin_session(&mut self) -> SessionKey {
        self.last_session += 1;
        let key = SessionKey(self.last_session);
        self.session = Some(key);
        self.phase = SessionPhase::LoadingInfo;
        self.info = Panel::Loading;
        self.preview = Panel::Loading;
        self.query.result = None;
        self.query.running = false;
        self.statistics = StatisticsPanel::default();
        key
    }

    pub fn session(&self) -> Option<SessionKey> {
        self.session
    }

    pub fn is_current(&self, session: SessionKey) -> bool {
        self.session == Some(session)
    }

    /// Tags a new preview request; earlier requests in the same session become stale.
    pub fn next_preview_request(&mut self) -> u64 {
        self.preview_request += 1;
        self.preview_request
    }

    pub fn is_current_preview(&self, session: SessionKey, request: u64) -> bool {
        self.is_current(session) && self.preview_request == request
    }
}
