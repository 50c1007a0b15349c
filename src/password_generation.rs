//! Utilities for generating passwords.

use log::debug;
use rand::distributions::Slice;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::{ClassSet, GenerationError, GenerationErrorRepr, Secret};

/// How long a password should be, and which character classes it must contain.
///
/// The length is signed so that a negative length coming from the command line is reported as
/// too small rather than failing to parse.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenerationRequest {
    pub length: i64,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub const DEFAULT_LENGTH: i64 = 16;
    /// Longest password that will be generated.
    pub const MAX_LENGTH: i64 = 1 << 20;

    pub fn new(length: i64, classes: ClassSet) -> GenerationRequest {
        GenerationRequest { length, classes }
    }

    /// Check that a password can be produced for this request: at least one class must be
    /// enabled, and the length must leave room for one character of every enabled class
    /// without exceeding [`Self::MAX_LENGTH`].
    ///
    /// Returns the length as a character count.
    pub fn validate(&self) -> Result<usize, GenerationError> {
        if self.classes.is_empty() {
            return Err(GenerationErrorRepr::NoClassSelected.into());
        }
        let required = self.classes.len();
        let length = usize::try_from(self.length)
            .ok()
            .filter(|len| *len >= required)
            .ok_or(GenerationErrorRepr::LengthTooSmall {
                length: self.length,
                required,
            })?;
        if self.length > Self::MAX_LENGTH {
            return Err(GenerationErrorRepr::LengthTooLarge {
                length: self.length,
                max: Self::MAX_LENGTH,
            }
            .into());
        }
        Ok(length)
    }
}

impl Default for GenerationRequest {
    fn default() -> GenerationRequest {
        GenerationRequest::new(Self::DEFAULT_LENGTH, ClassSet::all())
    }
}

/// Generate a password satisfying `request`.
///
/// One character is drawn from each enabled class, the rest of the length is filled from the
/// concatenation of all enabled alphabets, and the whole thing is then shuffled so the
/// guaranteed characters can land anywhere.
pub fn generate<R>(rng: &mut R, request: &GenerationRequest) -> Result<Secret, GenerationError>
where
    R: Rng + CryptoRng,
{
    let length = request.validate()?;
    debug!(
        "generating a {} character password from {:?}",
        length, request.classes
    );

    let mut chars = Vec::with_capacity(length);
    for class in request.classes.iter() {
        let drawn = generate_random_password(rng, class.alphabet(), 1)?;
        chars.extend(drawn.as_str().chars());
    }

    let alphabet = request.classes.combined_alphabet();
    let remaining = length - chars.len();
    debug!(
        "filling {} characters from a {} character alphabet",
        remaining,
        alphabet.len()
    );
    let filler = generate_random_password(rng, &alphabet, remaining)?;
    chars.extend(filler.as_str().chars());

    chars.shuffle(rng);
    Ok(Secret(chars.into_iter().collect()))
}

/// [`generate`], using the operating system's random source.
pub fn generate_with_os_rng(request: &GenerationRequest) -> Result<Secret, GenerationError> {
    generate(&mut OsRng, request)
}

/// Draw `len` characters from `alphabet`, each one independently and uniformly.
///
/// Fails if the alphabet is empty, even for a zero length.
pub fn generate_random_password<R>(
    rng: &mut R,
    alphabet: &[char],
    len: usize,
) -> Result<Secret, GenerationError>
where
    R: Rng + CryptoRng,
{
    let dist = Slice::new(alphabet).map_err(|_| GenerationErrorRepr::EmptyAlphabet)?;
    let secret = (0..len).map(|_| *rng.sample(&dist)).collect();
    Ok(Secret(secret))
}
