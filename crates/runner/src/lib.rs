//! Numerus Runner - chat session and command-line front end
//!
//! Wires the numeral engine to its collaborators:
//!
//! - **Config**: JSON runner configuration (bot name, typing delay, names, challenge pool)
//! - **Typing**: character-by-character output
//! - **Session**: the greeting / name / challenge / verdict exchange
//!
//! ## Architecture
//!
//! ```text
//!   stdin ──► Session ──► NameList (is this a known name?)
//!                │
//!                ├──────► ChallengeGenerator ──► Challenge
//!                │                                  │ judge (lenient)
//!                │                                  ▼
//!                │                         ExpressionEvaluator ──► Numeral
//!                ▼
//!          TypingWriter ──► stdout
//! ```

pub mod config;
pub mod session;
pub mod typing;

// Re-export main types
pub use config::{ConfigError, RunnerConfig};
pub use session::{Session, SessionError, SessionOutcome, SessionResult};
pub use typing::TypingWriter;
