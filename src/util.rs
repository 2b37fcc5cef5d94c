/// Numeric conversion and literal helpers.
///
/// This module provides checked conversions between big integers and native
/// integer types, and the digit-level readers used to parse integer and
/// decimal literals exactly. Every helper reports failure instead of silently
/// truncating.
pub mod num;
