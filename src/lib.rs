//! Player behaviour for a 2D platformer, driven from a fixed physics step.
//!
//! [`fsm`] is the reusable core: a registry of singleton states keyed by a
//! closed identity set. [`states`] plugs the five player stances into it, and
//! [`controllers`] keeps the simpler flag and switch variants next to it for
//! comparison.

pub mod components;
pub mod controllers;
pub mod engine;
pub mod fsm;
pub mod scene;
pub mod states;
pub mod systems;
pub mod ui;
