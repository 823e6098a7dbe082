//! Retry budgets for rejection-sampled randomness

/// Draws allowed when sampling a uniform integer from a range before giving up.
///
/// Each draw succeeds with probability above one half, so exhausting this
/// budget means the random source is broken.
pub const RANDOM_RANGE_MAX_ATTEMPTS: usize = 128;
