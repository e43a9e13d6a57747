//! Thrust state machine
//!
//! The engine is either coasting or thrusting. Changing mode produces an
//! edge; each edge is reported exactly once no matter how long the new mode
//! lasts, so the thruster effect starts and stops exactly once per burn.

/// Engine mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThrustState {
    #[default]
    Coasting,
    Thrusting,
}

/// A mode change, used to fire the enter/exit effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrustEdge {
    /// Coasting -> Thrusting
    Began,
    /// Thrusting -> Coasting
    Stopped,
}

impl ThrustState {
    /// Next mode given the thrust button, plus the edge if the mode changed.
    pub fn next(self, thrust_held: bool) -> (ThrustState, Option<ThrustEdge>) {
        match (self, thrust_held) {
            (ThrustState::Coasting, true) => (ThrustState::Thrusting, Some(ThrustEdge::Began)),
            (ThrustState::Thrusting, false) => (ThrustState::Coasting, Some(ThrustEdge::Stopped)),
            (state, _) => (state, None),
        }
    }

    pub fn is_thrusting(self) -> bool {
        self == ThrustState::Thrusting
    }
}

/// Current mode plus the edge waiting to be fired this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThrustMachine {
    state: ThrustState,
    pending: Option<ThrustEdge>,
}

impl ThrustMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's button level. Returns the new mode.
    ///
    /// An edge produced here replaces any edge not yet taken.
    pub fn feed(&mut self, thrust_held: bool) -> ThrustState {
        let (state, edge) = self.state.next(thrust_held);
        self.state = state;
        if edge.is_some() {
            self.pending = edge;
        }
        state
    }

    /// Take the pending edge, leaving none behind.
    pub fn take_edge(&mut self) -> Option<ThrustEdge> {
        self.pending.take()
    }

    pub fn state(&self) -> ThrustState {
        self.state
    }

    pub fn is_thrusting(&self) -> bool {
        self.state.is_thrusting()
    }

    /// Back to coasting with nothing pending.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
