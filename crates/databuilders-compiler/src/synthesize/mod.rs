//! Default value synthesis.
//!
//! Turns a `TypeShape` into one TypeScript expression that is a valid value of
//! that type. The result is a small expression tree (`Expr`) so intersections
//! can merge object literals without re-parsing rendered text.

mod builtins;
mod expr;
mod synthesizer;


pub use builtins::builtin_default;
pub use expr::{Entry, Expr};
pub use synthesizer::{Synthesis, Synthesizer};
