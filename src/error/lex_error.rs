#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a recoverable problem found while lexing.
pub enum LexError {
    /// A character that starts no token.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        offset:    usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, offset } => write!(f,
                                                                        "Error at offset {offset}: Unrecognized character '{}'.",
                                                                        character.escape_debug()),
        }
    }
}

impl std::error::Error for LexError {}
