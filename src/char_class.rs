use std::fmt;

/// A category of characters that a password may be required to contain.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in canonical order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed alphabet for this class.
    pub fn alphabet(self) -> &'static [char] {
        match self {
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        self.alphabet().contains(&ch)
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Upper => "uppercase",
            CharacterClass::Lower => "lowercase",
            CharacterClass::Digit => "digits",
            CharacterClass::Symbol => "symbols",
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Upper => 1 << 0,
            CharacterClass::Lower => 1 << 1,
            CharacterClass::Digit => 1 << 2,
            CharacterClass::Symbol => 1 << 3,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of character classes. Iteration always yields classes in canonical order
/// (upper, lower, digit, symbol), regardless of insertion order.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub fn empty() -> ClassSet {
        ClassSet(0)
    }

    pub fn all() -> ClassSet {
        CharacterClass::ALL.into_iter().collect()
    }

    /// Add a class to the set. Returns `true` if it was not already present.
    pub fn insert(&mut self, class: CharacterClass) -> bool {
        let was_present = self.contains(class);
        self.0 |= class.bit();
        !was_present
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    /// The concatenation of every member's alphabet.
    ///
    /// The built-in alphabets are disjoint, so this is also their union; no
    /// deduplication is done.
    pub fn combined_alphabet(&self) -> Vec<char> {
        let mut abc = Vec::new();
        for class in self.iter() {
            abc.extend_from_slice(class.alphabet());
        }
        abc
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> ClassSet {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

static UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
static LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
// All ASCII punctuation.
static SYMBOLS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<',
    '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];
