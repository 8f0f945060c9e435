#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A tunnel or a scenario referenced a valve that was never defined.
    UndefinedValve(String),
    /// No tunnel path exists between two valves the search needs to travel
    /// between. The input contract guarantees connectivity, so this is a
    /// violated precondition, not something a caller should retry.
    UnreachableValve { from: String, to: String },
    /// A negative time budget was supplied.
    InvalidTimeBudget(i64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::UndefinedValve(name) => write!(fmt, "undefined valve {}", name),
            Error::UnreachableValve { from, to } => {
                write!(fmt, "no tunnel path from {} to {}", from, to)
            }
            Error::InvalidTimeBudget(minutes) => {
                write!(fmt, "invalid time budget {} minutes", minutes)
            }
        }
    }
}

impl std::error::Error for Error {}
