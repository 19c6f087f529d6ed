/// Player command, decoded from a single key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Left,
    Right,
    Rotate,
    Down,
    Pause,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown command key {key:?}")]
pub struct UnknownCommandError {
    pub key: char,
}

impl Command {
    /// Maps `h`, `l`, `k`, `j`, `p` and `q` to their commands.
    ///
    /// ```
    /// use tetrad_engine::Command;
    ///
    /// assert_eq!(Command::from_char('k'), Some(Command::Rotate));
    /// assert_eq!(Command::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'h' => Some(Self::Left),
            'l' => Some(Self::Right),
            'k' => Some(Self::Rotate),
            'j' => Some(Self::Down),
            'p' => Some(Self::Pause),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

impl TryFrom<char> for Command {
    type Error = UnknownCommandError;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        Self::from_char(key).ok_or(UnknownCommandError { key })
    }
}
