/// Entry points and result types.
///
/// Defines the tagged [`core::Parsed`] outcome, control signals, and the
/// top-level `parse` and `parse_complete` functions.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence tiers, including the
/// implicit "last answer" operand for a leading operator.
pub mod binary;

/// Primary expression parsing.
///
/// Numbers, constants, `ans`, function calls, parenthesized groups and the
/// `clear`/`exit` control words.
pub mod primary;

/// Utility functions for the parser.
///
/// Token lookahead, expectation checks and argument lists.
pub mod utils;
