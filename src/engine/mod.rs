pub mod input;
pub mod script;
