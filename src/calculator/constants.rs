// Constants for the calculator engine

/// Maximum number of characters the display can hold
pub const MAX_DISPLAY_LENGTH: usize = 15;

/// Sentinel shown after a failed computation
pub const ERROR_DISPLAY: &str = "Error";

/// Display text on startup and after Clear
pub const INITIAL_DISPLAY: &str = "0";

/// Mantissa digits used when a value has to be shown in exponential form.
/// Six characters are reserved for the leading digit, point and exponent.
pub const EXPONENTIAL_PRECISION: usize = MAX_DISPLAY_LENGTH - 6;

/// Magnitude above which overlong values switch to exponential form
pub const EXPONENTIAL_UPPER_BOUND: f64 = 1e15;

/// Magnitude below which overlong non-zero values switch to exponential form
pub const EXPONENTIAL_LOWER_BOUND: f64 = 1e-5;

/// Fraction digits needed to write any finite `f64` exactly in decimal
pub const EXACT_FRACTION_DIGITS: usize = 1074;
