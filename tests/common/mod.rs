#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use stance::components::{Character, PlayerFsm, Stance, PHYSICS_DT};
use stance::engine::input::ActionInput;
use stance::fsm::{State, StateKey, StateMachine, StateMachineBuilder, Transition};
use stance::states::{Diving, Ducking, Jumping, Moving, Standing};

/// Wraps a state and counts how often it is entered.
pub struct Counted<S> {
    inner: S,
    enters: Arc<AtomicU32>,
}

impl<S: State<Character, Stance>> State<Character, Stance> for Counted<S> {
    fn key(&self) -> Stance {
        self.inner.key()
    }

    fn enter(&self, player: &mut Character) {
        self.enters.fetch_add(1, Ordering::SeqCst);
        self.inner.enter(player);
    }

    fn update(&self, player: &mut Character, dt: f32) -> Option<Stance> {
        self.inner.update(player, dt)
    }
}

#[derive(Default, Clone)]
pub struct EnterCounts([Arc<AtomicU32>; Stance::COUNT]);

impl EnterCounts {
    pub fn get(&self, stance: Stance) -> u32 {
        self.0[stance.index()].load(Ordering::SeqCst)
    }

    pub fn total(&self) -> u32 {
        Stance::ALL.iter().map(|&s| self.get(s)).sum()
    }
}

fn register<S>(
    builder: StateMachineBuilder<Character, Stance>,
    state: S,
    counts: &EnterCounts,
    skip: Option<Stance>,
) -> StateMachineBuilder<Character, Stance>
where
    S: State<Character, Stance> + 'static,
{
    let key = state.key();
    if skip == Some(key) {
        return builder;
    }
    builder.with(Counted {
        inner: state,
        enters: counts.0[key.index()].clone(),
    })
}

/// The player machine with every state's `enter` counted. `skip` leaves one
/// stance unregistered.
pub fn counted_machine(player: &mut Character, skip: Option<Stance>) -> (PlayerFsm, EnterCounts) {
    let counts = EnterCounts::default();
    let builder = StateMachine::builder();
    let builder = register(builder, Standing, &counts, skip);
    let builder = register(builder, Jumping, &counts, skip);
    let builder = register(builder, Ducking, &counts, skip);
    let builder = register(builder, Diving, &counts, skip);
    let builder = register(builder, Moving, &counts, skip);
    let fsm = builder.build(player, Stance::Standing).unwrap();
    (fsm, counts)
}

/// Feed one tick of signals and run the machine.
pub fn tick(
    fsm: &mut PlayerFsm,
    player: &mut Character,
    input: ActionInput,
    on_floor: bool,
) -> Transition<Stance> {
    player.input = input;
    player.on_floor = on_floor;
    fsm.tick(player, PHYSICS_DT)
}

pub fn idle() -> ActionInput {
    ActionInput::default()
}
