//! Builder plans.
//!
//! A plan is everything the emitter needs to render one builder module: names,
//! import specifiers, the synthesized default object and one setter per field.
//! All shape-dependent decisions are made here.

mod paths;
mod planner;


pub use paths::module_specifier;
pub use planner::{BuilderPlan, DefaultField, NestedBuilder, Planner, SetterBody, SetterDescriptor};
