//! Form state: the single source of truth for password parameters.
//!
//! The view reads it to render, the controller writes it through
//! [`PasswordState::update_password_length`]. Nothing else mutates it.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// OPTIONS
// ============================================================================

/// A character class the generated password may draw from.
///
/// Doubles as the identifier the view reports when a checkbox is toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordOption {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl PasswordOption {
    /// All options in display order.
    pub const ALL: [PasswordOption; 4] = [
        PasswordOption::Uppercase,
        PasswordOption::Lowercase,
        PasswordOption::Numbers,
        PasswordOption::Symbols,
    ];

    /// Stable lowercase identifier ("uppercase", "symbols", ...).
    pub fn name(self) -> &'static str {
        match self {
            PasswordOption::Uppercase => "uppercase",
            PasswordOption::Lowercase => "lowercase",
            PasswordOption::Numbers => "numbers",
            PasswordOption::Symbols => "symbols",
        }
    }

    /// Label shown next to the checkbox.
    pub fn label(self) -> &'static str {
        match self {
            PasswordOption::Uppercase => "Include uppercase letters",
            PasswordOption::Lowercase => "Include lowercase letters",
            PasswordOption::Numbers => "Include numbers",
            PasswordOption::Symbols => "Include symbols",
        }
    }

    /// 1-based position in the form, used for number-key shortcuts.
    pub fn position(self) -> u8 {
        match self {
            PasswordOption::Uppercase => 1,
            PasswordOption::Lowercase => 2,
            PasswordOption::Numbers => 3,
            PasswordOption::Symbols => 4,
        }
    }

    /// Inverse of [`position`](Self::position).
    pub fn from_position(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.position() == n)
    }
}

impl fmt::Display for PasswordOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One flag per [`PasswordOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionFlags {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for OptionFlags {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: false,
        }
    }
}

impl OptionFlags {
    pub fn get(&self, option: PasswordOption) -> bool {
        match option {
            PasswordOption::Uppercase => self.uppercase,
            PasswordOption::Lowercase => self.lowercase,
            PasswordOption::Numbers => self.numbers,
            PasswordOption::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, option: PasswordOption, checked: bool) {
        let slot = match option {
            PasswordOption::Uppercase => &mut self.uppercase,
            PasswordOption::Lowercase => &mut self.lowercase,
            PasswordOption::Numbers => &mut self.numbers,
            PasswordOption::Symbols => &mut self.symbols,
        };
        *slot = checked;
    }

    /// Options currently enabled, in display order.
    pub fn enabled(&self) -> Vec<PasswordOption> {
        PasswordOption::ALL
            .into_iter()
            .filter(|o| self.get(*o))
            .collect()
    }
}

// ============================================================================
// LENGTH
// ============================================================================

/// Inclusive bounds of the length slider plus its starting value.
///
/// Invariant: `1 <= min <= default <= max`. Enforced by
/// [`Config::validate`](crate::config::Config::validate) before a range
/// ever reaches a [`PasswordState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LengthRange {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl Default for LengthRange {
    fn default() -> Self {
        Self {
            min: 4,
            max: 64,
            default: 16,
        }
    }
}

impl LengthRange {
    /// Clamp `value` into `min..=max`. Never panics, even on an
    /// unvalidated range.
    pub fn clamp(&self, value: u32) -> u32 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

// ============================================================================
// STATE
// ============================================================================

/// Current password-generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordState {
    pub password_length: u32,
    pub options: OptionFlags,
    pub length_range: LengthRange,
}

impl Default for PasswordState {
    fn default() -> Self {
        Self::new(LengthRange::default(), OptionFlags::default())
    }
}

impl PasswordState {
    /// Create a state at the range's default length.
    pub fn new(length_range: LengthRange, options: OptionFlags) -> Self {
        Self {
            password_length: length_range.clamp(length_range.default),
            options,
            length_range,
        }
    }

    /// Set the password length, clamped into the configured range.
    ///
    /// Returns the value actually stored.
    pub fn update_password_length(&mut self, value: u32) -> u32 {
        let stored = self.length_range.clamp(value);
        if stored != value {
            tracing::debug!(requested = value, stored, "password length clamped");
        }
        self.password_length = stored;
        stored
    }
}

/// Dump the full state as pretty JSON at debug level.
///
/// Diagnostic only.
pub fn log_state(state: &PasswordState) {
    match serde_json::to_string_pretty(state) {
        Ok(json) => tracing::debug!("current state:\n{json}"),
        Err(e) => tracing::warn!(error = %e, "failed to serialize state"),
    }
}

// ============================================================================
// TESTS
// ============================================================================
