//! Terminal implementation of the form view.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: screen data, actions, transitions; implements `FormView`
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `run`: effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
pub use state::FormScreen;
