#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Seeds the /8 sampler so repeated runs produce the same addresses.
    ///
    /// `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Each level silences one more class of log output.
    pub quiet: u8,
    pub verbose: bool,
    /// Sort the final list numerically instead of keeping expansion order.
    pub sort_numeric: bool,
}
