//! Semver 2.0.0 text parser, implemented as a character-level state machine.

use thiserror::Error;

use crate::version_data::{IdKind, PrereleaseId, VersionData};

/// Error raised when a version string does not conform to the semver 2.0.0 grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character outside the grammar of the section being read.
    #[error("invalid character encountered: '{0}'")]
    InvalidCharacter(char),
    /// A major/minor/patch token longer than one digit starting with '0'.
    #[error("leading 0 not allowed")]
    LeadingZero,
    /// A numeric prerelease identifier longer than one digit starting with '0'.
    #[error("numeric identifiers cannot have leading 0")]
    LeadingZeroIdentifier,
    /// A prerelease or build identifier with no characters.
    #[error("version identifier cannot be empty")]
    EmptyIdentifier,
    /// A major/minor/patch token that is empty or does not fit the numeric range.
    #[error("invalid version number \"{0}\"")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
}

/// One entry of a state's transition table: seeing `trigger` fires the
/// optional commit hook, then moves the machine to `next`.
struct Transition {
    trigger: char,
    next: ParserState,
    hook: Option<fn(&mut Cursor) -> Result<(), ParseError>>,
}

const MAJOR_TRANSITIONS: &[Transition] = &[Transition {
    trigger: '.',
    next: ParserState::Minor,
    hook: None,
}];

const MINOR_TRANSITIONS: &[Transition] = &[Transition {
    trigger: '.',
    next: ParserState::Patch,
    hook: None,
}];

const PATCH_TRANSITIONS: &[Transition] = &[
    Transition {
        trigger: '-',
        next: ParserState::Prerelease,
        hook: None,
    },
    Transition {
        trigger: '+',
        next: ParserState::Build,
        hook: None,
    },
];

// An identifier separator (.) stays in the same state but fires the hook,
// so each individual identifier is committed separately.
const PRERELEASE_TRANSITIONS: &[Transition] = &[
    Transition {
        trigger: '.',
        next: ParserState::Prerelease,
        hook: Some(commit_prerelease),
    },
    Transition {
        trigger: '+',
        next: ParserState::Build,
        hook: None,
    },
];

const BUILD_TRANSITIONS: &[Transition] = &[Transition {
    trigger: '.',
    next: ParserState::Build,
    hook: Some(commit_build),
}];

impl ParserState {
    fn transitions(self) -> &'static [Transition] {
        match self {
            ParserState::Major => MAJOR_TRANSITIONS,
            ParserState::Minor => MINOR_TRANSITIONS,
            ParserState::Patch => PATCH_TRANSITIONS,
            ParserState::Prerelease => PRERELEASE_TRANSITIONS,
            ParserState::Build => BUILD_TRANSITIONS,
        }
    }

    fn validator(self) -> fn(&str, char) -> Result<(), ParseError> {
        match self {
            ParserState::Major | ParserState::Minor | ParserState::Patch => core_validator,
            ParserState::Prerelease | ParserState::Build => identifier_validator,
        }
    }
}

/// Rejects a character before it joins a major/minor/patch token.
fn core_validator(token: &str, c: char) -> Result<(), ParseError> {
    if !c.is_ascii_digit() {
        return Err(ParseError::InvalidCharacter(c));
    }
    // Appending to a token that currently reads "0" would create a leading zero.
    if token.starts_with('0') {
        return Err(ParseError::LeadingZero);
    }
    Ok(())
}

/// Rejects a character before it joins a prerelease or build identifier.
fn identifier_validator(_token: &str, c: char) -> Result<(), ParseError> {
    if c.is_ascii_alphanumeric() || c == '-' {
        Ok(())
    } else {
        Err(ParseError::InvalidCharacter(c))
    }
}

/// Mutable accumulators scoped to a single parse call.
struct Cursor {
    state: ParserState,
    // State before the last transition. The build commit hook needs it to
    // flush a prerelease token that never saw a terminating separator,
    // because the '+' transition out of prerelease carries no hook.
    prev_state: ParserState,
    major: String,
    minor: String,
    patch: String,
    pre_token: String,
    build_token: String,
    prerelease: Vec<PrereleaseId>,
    build: Vec<String>,
}

impl Cursor {
    fn new() -> Self {
        Cursor {
            state: ParserState::Major,
            prev_state: ParserState::Major,
            major: String::new(),
            minor: String::new(),
            patch: String::new(),
            pre_token: String::new(),
            build_token: String::new(),
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    fn token(&self) -> &str {
        match self.state {
            ParserState::Major => &self.major,
            ParserState::Minor => &self.minor,
            ParserState::Patch => &self.patch,
            ParserState::Prerelease => &self.pre_token,
            ParserState::Build => &self.build_token,
        }
    }

    fn token_mut(&mut self) -> &mut String {
        match self.state {
            ParserState::Major => &mut self.major,
            ParserState::Minor => &mut self.minor,
            ParserState::Patch => &mut self.patch,
            ParserState::Prerelease => &mut self.pre_token,
            ParserState::Build => &mut self.build_token,
        }
    }

    /// Consume one character: either fire a transition from the current
    /// state's table, or validate and append to the accumulating token.
    fn step(&mut self, c: char) -> Result<(), ParseError> {
        for transition in self.state.transitions() {
            if transition.trigger == c {
                if let Some(hook) = transition.hook {
                    hook(self)?;
                }
                self.prev_state = self.state;
                self.state = transition.next;
                return Ok(());
            }
        }
        self.state.validator()(self.token(), c)?;
        self.token_mut().push(c);
        Ok(())
    }
}

/// Finalize the accumulated prerelease token: classify it, reject empty
/// and leading-zero-numeric identifiers, append it, clear the buffer.
fn commit_prerelease(cursor: &mut Cursor) -> Result<(), ParseError> {
    if cursor.pre_token.is_empty() {
        return Err(ParseError::EmptyIdentifier);
    }
    let id = PrereleaseId::classify(std::mem::take(&mut cursor.pre_token));
    if id.kind() == IdKind::Numeric && id.text().len() > 1 && id.text().starts_with('0') {
        return Err(ParseError::LeadingZeroIdentifier);
    }
    cursor.prerelease.push(id);
    Ok(())
}

/// Finalize the accumulated build token, first flushing a prerelease token
/// left pending by the '-prerelease+build' path.
fn commit_build(cursor: &mut Cursor) -> Result<(), ParseError> {
    if cursor.prev_state == ParserState::Prerelease {
        commit_prerelease(cursor)?;
    }
    if cursor.build_token.is_empty() {
        return Err(ParseError::EmptyIdentifier);
    }
    cursor.build.push(std::mem::take(&mut cursor.build_token));
    Ok(())
}

/// Converts a fully accumulated major/minor/patch token, well-formedness
/// already established character by character.
fn parse_number(token: &str) -> Result<u64, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

/// Parses semver 2.0.0 strings into [`VersionData`] values.
///
/// The parser is a state machine: each character of the version string is
/// either appended to the current token or triggers a state transition.
/// Transitions can carry commit hooks that finalize the token accumulated
/// so far; a parse either produces a complete version or fails, never
/// anything in between.
pub struct Parser;

impl Parser {
    /// Parse a version string, rejecting any input that violates the grammar.
    pub fn parse(text: &str) -> Result<VersionData, ParseError> {
        let mut cursor = Cursor::new();
        for c in text.chars() {
            cursor.step(c)?;
        }

        // The last token never saw a trailing separator, so no transition
        // committed it; run the same hooks by hand.
        match cursor.state {
            ParserState::Prerelease => commit_prerelease(&mut cursor)?,
            ParserState::Build => commit_build(&mut cursor)?,
            _ => {}
        }

        Ok(VersionData::new(
            parse_number(&cursor.major)?,
            parse_number(&cursor.minor)?,
            parse_number(&cursor.patch)?,
            cursor.prerelease,
            cursor.build,
        ))
    }
}
