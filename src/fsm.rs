use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

/// Closed set of state identities a machine can be keyed by.
///
/// Implemented by a fieldless enum. `index()` must be dense in `0..COUNT` so
/// the registry can be a fixed table instead of a map.
pub trait StateKey: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    const COUNT: usize;

    fn index(self) -> usize;

    /// Stable label used by diagnostics (logs, HUD).
    fn name(self) -> &'static str;
}

/// One behavioural phase of an actor of type `A`.
///
/// States hold no per-instance mutable data: everything they work on lives on
/// the actor handed to each call, so one instance is reused for the whole
/// lifetime of its machine. `enter` has no way to reach the machine, so a
/// state cannot start another transition while it is being entered.
pub trait State<A: ?Sized, K: StateKey>: Send + Sync {
    fn key(&self) -> K;

    /// Called exactly once per activation, right after the machine swaps to
    /// this state.
    fn enter(&self, actor: &mut A);

    /// Called once per tick while this state is current. Returns the key of
    /// the state to switch to, if any.
    fn update(&self, actor: &mut A, dt: f32) -> Option<K>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FsmError<K: StateKey> {
    #[error("no state registered for {0:?}")]
    NotRegistered(K),
    #[error("state {0:?} registered twice")]
    DuplicateState(K),
    #[error("initial state {0:?} is not registered")]
    UnregisteredInitial(K),
}

/// Outcome of a transition request or a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition<K> {
    /// `current` did not change and no `enter` ran.
    Stayed,
    Entered { from: K, to: K },
}

/// Registry of singleton states plus the one that is currently active.
///
/// Transition logic lives in the states themselves; the machine only
/// arbitrates: it validates requests, swaps `current` and runs `enter`.
///
/// # Usage
/// ```ignore
/// let mut fsm = StateMachine::builder()
///     .with(Standing)
///     .with(Jumping)
///     .build(&mut actor, Stance::Standing)?;
/// // Each physics step:
/// fsm.tick(&mut actor, dt);
/// ```
pub struct StateMachine<A: ?Sized, K: StateKey> {
    states: Box<[Option<Box<dyn State<A, K>>>]>,
    current: K,
    previous: K,
    /// Seconds spent in the current state. Reset to 0.0 on each transition.
    elapsed: f32,
    entered_this_tick: bool,
    rejected: u32,
}

impl<A: ?Sized, K: StateKey> StateMachine<A, K> {
    pub fn builder() -> StateMachineBuilder<A, K> {
        StateMachineBuilder::new()
    }

    pub fn current(&self) -> K {
        self.current
    }

    pub fn current_name(&self) -> &'static str {
        self.current.name()
    }

    pub fn previous(&self) -> K {
        self.previous
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// `true` from a transition until the start of the next tick.
    pub fn just_entered(&self) -> bool {
        self.entered_this_tick
    }

    pub fn is_registered(&self, key: K) -> bool {
        self.slot(key).is_some()
    }

    /// Number of transition requests dropped because their target had no
    /// registered state.
    pub fn rejected_requests(&self) -> u32 {
        self.rejected
    }

    /// Switch to `key` and run its `enter` hook.
    ///
    /// Requesting the current state is a no-op, so one-shot resets done in
    /// `enter` never repeat while the state stays active. An unregistered
    /// target is reported and dropped, leaving `current` and the actor as
    /// they were.
    pub fn transition_to(&mut self, actor: &mut A, key: K) -> Result<Transition<K>, FsmError<K>> {
        if !self.is_registered(key) {
            self.rejected += 1;
            warn!(
                current = self.current.name(),
                requested = ?key,
                "transition to unregistered state ignored"
            );
            return Err(FsmError::NotRegistered(key));
        }

        if key == self.current {
            return Ok(Transition::Stayed);
        }

        let from = self.current;
        self.previous = from;
        self.current = key;
        self.elapsed = 0.0;
        self.entered_this_tick = true;
        self.enter_current(actor);
        debug!(from = from.name(), to = key.name(), "state transition");

        Ok(Transition::Entered { from, to: key })
    }

    /// Run one physics step: delegate to the current state's `update` and
    /// apply whatever transition it asks for before returning.
    pub fn tick(&mut self, actor: &mut A, dt: f32) -> Transition<K> {
        self.elapsed += dt;
        self.entered_this_tick = false;

        let request = match self.slot(self.current) {
            Some(state) => state.update(actor, dt),
            None => return Transition::Stayed,
        };

        match request {
            // Already reported by `transition_to`.
            Some(next) => self.transition_to(actor, next).unwrap_or(Transition::Stayed),
            None => Transition::Stayed,
        }
    }

    fn slot(&self, key: K) -> Option<&dyn State<A, K>> {
        self.states.get(key.index()).and_then(|s| s.as_deref())
    }

    fn enter_current(&self, actor: &mut A) {
        if let Some(state) = self.slot(self.current) {
            state.enter(actor);
        }
    }
}

impl<A: ?Sized, K: StateKey> fmt::Debug for StateMachine<A, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("elapsed", &self.elapsed)
            .field("rejected", &self.rejected)
            .finish()
    }
}

/// Collects the state instances before the machine is started. Errors are
/// held until [`build`](Self::build) so registration can be chained.
pub struct StateMachineBuilder<A: ?Sized, K: StateKey> {
    states: Vec<Option<Box<dyn State<A, K>>>>,
    error: Option<FsmError<K>>,
}

impl<A: ?Sized, K: StateKey> StateMachineBuilder<A, K> {
    fn new() -> Self {
        Self {
            states: (0..K::COUNT).map(|_| None).collect(),
            error: None,
        }
    }

    pub fn with(mut self, state: impl State<A, K> + 'static) -> Self {
        if self.error.is_some() {
            return self;
        }
        let key = state.key();
        match self.states.get_mut(key.index()) {
            Some(slot) if slot.is_none() => *slot = Some(Box::new(state)),
            // An out-of-range index can never be looked up, treat it as a clash.
            _ => self.error = Some(FsmError::DuplicateState(key)),
        }
        self
    }

    /// Finish registration and perform the forced transition into `initial`.
    pub fn build(self, actor: &mut A, initial: K) -> Result<StateMachine<A, K>, FsmError<K>> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let machine = StateMachine {
            states: self.states.into_boxed_slice(),
            current: initial,
            previous: initial,
            elapsed: 0.0,
            entered_this_tick: true,
            rejected: 0,
        };
        if !machine.is_registered(initial) {
            return Err(FsmError::UnregisteredInitial(initial));
        }

        machine.enter_current(actor);
        debug!(initial = initial.name(), "state machine started");
        Ok(machine)
    }
}
