//! TypeScript rendering of builder plans.
//!
//! The emitter makes no shape-dependent decisions: every name, import and
//! default expression is already resolved in the `BuilderPlan`.

mod base_builder;
mod emitter;


pub use base_builder::emit_base_builder;
pub use emitter::{Emitter, emit};
