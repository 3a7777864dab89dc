//! Composite password validation rules
//!
//! This library validates passwords against a fixed, ordered rule set and
//! reports per-rule results for driving a live requirements checklist and
//! strength meter.
//!
//! Seven baseline rules cover length, character classes and a
//! common-password denylist; four advanced heuristics reject repetitive,
//! keyboard-pattern, ambiguous-glyph and non-human-like passwords. The final
//! decision requires all eleven.
//!
//! # Features
//!
//! - `async` (default): Enables debounced live evaluation over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Custom path to an extended denylist file
//!   (default: `./assets/denylist.txt`). Optional; the built-in denylist is
//!   always active.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_rules::{evaluate_all, is_valid};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("StrongPass1!".to_string().into());
//!
//! // Final decision on submission
//! assert!(is_valid(&password));
//!
//! // Per-rule feedback for a checklist and strength meter
//! let evaluation = evaluate_all(&password);
//! for outcome in &evaluation.checks {
//!     println!("{} {}", if outcome.passed { "ok" } else { "--" }, outcome.label);
//! }
//! println!("Password strength: {}", evaluation.band());
//! ```

// Internal modules
mod denylist;
mod rules;
mod types;
mod validator;

// Public API
pub use denylist::{DenylistError, get_denylist, init_denylist, init_denylist_from_path, is_common};
pub use rules::{RULES, Rule, SPECIAL_CHARS};
pub use types::{Evaluation, MAX_SCORE, RuleOutcome, StrengthBand, Tier};
pub use validator::{evaluate_all, is_valid};

#[cfg(feature = "async")]
pub use validator::evaluate_all_tx;
