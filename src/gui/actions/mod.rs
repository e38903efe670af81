// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,generate,relayout}.

mod copy;     // src/gui/actions/copy.rs
mod export;   // src/gui/actions/export.rs
mod generate; // src/gui/actions/generate.rs

pub use copy::copy;
pub use export::export;
pub use generate::{generate, relayout};
