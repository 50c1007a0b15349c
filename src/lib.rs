//! Random password generation with guaranteed character-class coverage.

mod char_class;
pub mod password_generation;

pub use char_class::{CharacterClass, ClassSet};
pub use password_generation::{generate, generate_with_os_rng, GenerationRequest};

/// A generated password.
///
/// The `Debug` output is opaque, so a password never ends up in a log line by accident; use
/// [`Secret::as_str`] to get at the text.
#[derive(Clone, Eq, PartialEq)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes) in the secret.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

/// The request could not be satisfied as configured.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct GenerationError(GenerationErrorRepr);

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self.0 {
            GenerationErrorRepr::NoClassSelected => ErrorKind::NoClassSelected,
            GenerationErrorRepr::LengthTooSmall { .. } => ErrorKind::LengthTooSmall,
            GenerationErrorRepr::LengthTooLarge { .. } => ErrorKind::LengthTooLarge,
            GenerationErrorRepr::EmptyAlphabet => ErrorKind::EmptyAlphabet,
        }
    }
}

impl From<GenerationErrorRepr> for GenerationError {
    fn from(err: GenerationErrorRepr) -> GenerationError {
        GenerationError(err)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Every character class was disabled.
    NoClassSelected,
    /// The length cannot fit one character of each enabled class.
    LengthTooSmall,
    /// The length is above the supported maximum.
    LengthTooLarge,
    /// Characters were requested from an empty alphabet.
    EmptyAlphabet,
}

#[derive(Debug, thiserror::Error)]
enum GenerationErrorRepr {
    #[error("no character class selected; enable at least one of uppercase, lowercase, digits or symbols")]
    NoClassSelected,
    #[error(
        "length too small for required classes: the length ({length}) must be at least the \
         number of required character classes ({required})"
    )]
    LengthTooSmall { length: i64, required: usize },
    #[error("length too large: the length ({length}) must be at most {max}")]
    LengthTooLarge { length: i64, max: i64 },
    #[error("cannot draw characters from an empty alphabet")]
    EmptyAlphabet,
}
