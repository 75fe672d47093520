/// Parser state and entry points.
///
/// Holds the [`core::Parser`] that owns the token cursor and borrows the
/// arena, splits input into `;`-separated statements and resynchronizes
/// after a statement fails to parse.
pub mod core;

/// Precedence climbing.
///
/// Parses prefix operators and runs the infix loop, including the
/// synthesized multiplication for juxtaposed operands.
pub mod infix;

/// Primary expressions.
///
/// Identifiers, calls, parenthesized groups, vector literals,
/// absolute-value blocks and number literals.
pub mod primary;

/// Token classification helpers shared by the parser.
pub mod utils;

pub use self::core::{MAX_NESTING, ParseResult, Parser, parse_expression, parse_statements};
