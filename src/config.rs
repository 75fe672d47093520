/// Printing and diagnostics settings.
///
/// A `Config` is passed explicitly to everything that formats values, so two
/// sessions with different settings never interfere.
///
/// Without a `precision`, reals print with the fewest digits that parse back
/// to the same value.
///
/// ## Example
/// ```
/// use calx::config::Config;
///
/// let config = Config { full_precision: true,
///                       ..Config::default() };
/// assert_eq!(config.precision, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Significant digits for reals, or decimals with `full_precision`.
    pub precision:        Option<usize>,
    /// Print reals in fixed notation.
    pub full_precision:   bool,
    /// Print booleans as `1` and `0`.
    pub bools_as_numbers: bool,
    /// Log parse and evaluation durations.
    pub timing:           bool,
}
