//! Chat Session - one greeting, one name, one numeral question
//!
//! ```text
//!   greet ──► read name ──► classify ──► ask challenge ──► read answer ──► judge
//!                                                                           │
//!                                                   pass / failure message ◄┘
//! ```
//!
//! Any failure ends the session with a message; nothing is retried.

use log::{debug, info, warn};
use numerus_challenge::{Challenge, ChallengeError, ChallengeGenerator, Verdict};
use numerus_names::{NameList, normalize};
use rand::Rng;
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::config::RunnerConfig;
use crate::typing::TypingWriter;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Input ended before the session finished")]
    EndOfInput,

    #[error("Challenge error: {0}")]
    Challenge(#[from] ChallengeError),
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// What happened in a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Name as the user gave it, normalized
    pub name: String,
    /// Known name matched in the reply, if any
    pub known_name: Option<String>,
    pub verdict: Verdict,
}

impl SessionOutcome {
    pub fn passed(&self) -> bool {
        self.verdict.is_pass()
    }
}

/// Interactive question/answer session over any line reader and writer
pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: TypingWriter<W>,
    bot_name: String,
    names: NameList,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: &RunnerConfig, names: NameList) -> Self {
        Self {
            input,
            output: TypingWriter::new(output, config.typing_delay()),
            bot_name: config.bot_name.clone(),
            names,
        }
    }

    /// Draw a challenge and run the session with it
    ///
    /// A challenge that cannot be built ends the session with a failure
    /// message and the error.
    pub fn run_generated<G: Rng + ?Sized>(
        &mut self,
        generator: &ChallengeGenerator,
        rng: &mut G,
    ) -> SessionResult<SessionOutcome> {
        match generator.generate(rng) {
            Ok(challenge) => self.run(&challenge),
            Err(e) => {
                warn!("challenge generation failed: {}", e);
                self.say(&format!("Something went wrong: {}. Goodbye.", e))?;
                Err(e.into())
            }
        }
    }

    /// Run the full exchange for one challenge
    pub fn run(&mut self, challenge: &Challenge) -> SessionResult<SessionOutcome> {
        info!("session started, challenge {}", challenge.prompt());

        self.say(&format!("Hello! I'm {}. What's your name?", self.bot_name))?;
        let reply = self.read_line()?;
        let known_name = self.names.matched_names(&reply).into_iter().next();
        let name = normalize(&reply);

        match &known_name {
            Some(known) => self.say(&format!("Nice to meet you, {}!", title_case(known)))?,
            None => self.say("Nice to meet you, stranger.")?,
        }
        debug!("name {:?} known as {:?}", name, known_name);

        self.say(&format!("Quick question: what is {}?", challenge.prompt()))?;
        let answer = self.read_line()?;
        let verdict = challenge.judge(&answer);

        match &verdict {
            Verdict::Pass => {
                self.say(&format!(
                    "Correct! {} is {}.",
                    challenge.prompt(),
                    challenge.expected()
                ))?;
            }
            Verdict::Fail { expected, .. } => {
                self.say(&format!(
                    "Sorry, that's not right. {} is {}. Goodbye.",
                    challenge.prompt(),
                    expected
                ))?;
            }
        }
        info!("session finished: {}", verdict);

        Ok(SessionOutcome {
            name,
            known_name,
            verdict,
        })
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    fn say(&mut self, text: &str) -> SessionResult<()> {
        self.output.write_line(&format!("{}: {}", self.bot_name, text))?;
        Ok(())
    }

    fn read_line(&mut self) -> SessionResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn title_case(name: &str) -> String {
    name.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("ada"), "Ada");
        assert_eq!(capitalize(""), "");
        assert_eq!(title_case("ada lovelace"), "Ada Lovelace");
    }
}
