//! pwgen-form: settings form for a password generator.
//!
//! A [`controller::Controller`] wires a [`view::FormView`] (length slider and
//! character-class checkboxes) to an owned [`model::PasswordState`].

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod report;
pub mod tui;
pub mod view;
