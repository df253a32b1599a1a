/// A guessed or secret number.
pub type Guess = u8;

/// Count type used for attempt budgets and attempt counters.
pub type AttemptCount = u8;
