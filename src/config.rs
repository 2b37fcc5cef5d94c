use std::collections::HashMap;

use num_bigint::BigInt;

/// Number format used when none has been set.
pub const DEFAULT_FORMAT: &str = "%v";
/// Rational format used when none has been set.
pub const DEFAULT_RAT_FORMAT: &str = "%v/%v";
/// Debug flag that prints the parse tree of every line before evaluating it.
pub const PARSE_DEBUG: &str = "parse";

/// Display formats, index origin and debug flags.
///
/// The evaluator only reads the configuration; it is set up once by whoever
/// drives a session, typically from command line flags.
#[derive(Debug, Clone, Default)]
pub struct Config {
    format:     Option<String>,
    rat_format: Option<String>,
    origin:     usize,
    debug:      HashMap<String, bool>,
}

impl Config {
    /// Creates a configuration with the default formats, origin 0 and every
    /// debug flag off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The format applied to integers. Defaults to `%v`.
    #[must_use]
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }

    /// The format applied to the numerator and denominator of a rational.
    /// Defaults to `%v/%v`.
    #[must_use]
    pub fn rat_format(&self) -> &str {
        self.rat_format.as_deref().unwrap_or(DEFAULT_RAT_FORMAT)
    }

    /// Sets the integer format; the rational format becomes `format/format`.
    /// An empty string restores both defaults.
    pub fn set_format(&mut self, format: &str) {
        if format.is_empty() {
            self.format = None;
            self.rat_format = None;
        } else {
            self.format = Some(format.to_string());
            self.rat_format = Some(format!("{format}/{format}"));
        }
    }

    /// Reports whether the named debug flag is on.
    #[must_use]
    pub fn debug(&self, flag: &str) -> bool {
        self.debug.get(flag).copied().unwrap_or(false)
    }

    pub fn set_debug(&mut self, flag: &str, state: bool) {
        self.debug.insert(flag.to_string(), state);
    }

    /// The index origin: the index of the first element of a vector, and the
    /// first value produced by `iota`.
    #[must_use]
    pub const fn origin(&self) -> usize {
        self.origin
    }

    pub const fn set_origin(&mut self, origin: usize) {
        self.origin = origin;
    }
}

/// Expands a printf-style format with big-integer arguments.
///
/// Supported verbs are `%v` and `%d` (decimal), `%x`, `%X`, `%o`, `%b`,
/// plus `%%` for a literal percent sign. Each verb consumes the next
/// argument; all other text is copied unchanged.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use vecalc::config::apply_format;
///
/// let s = apply_format("%d is %x in hex", &[&BigInt::from(31), &BigInt::from(31)]);
/// assert_eq!(s, "31 is 1f in hex");
/// ```
#[must_use]
pub fn apply_format(format: &str, args: &[&BigInt]) -> String {
    let mut out = String::new();
    let mut args = args.iter();
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(verb) = chars.next() else {
            out.push('%');
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }
        let Some(arg) = args.next() else {
            out.push_str(&format!("%!{verb}(MISSING)"));
            continue;
        };
        let text = match verb {
            'v' | 'd' => format!("{arg}"),
            'x' => format!("{arg:x}"),
            'X' => format!("{arg:X}"),
            'o' => format!("{arg:o}"),
            'b' => format!("{arg:b}"),
            _ => format!("%!{verb}({arg})"),
        };
        out.push_str(&text);
    }

    out
}
