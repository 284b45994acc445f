/// The evaluator module computes results from expression trees.
///
/// The evaluator traverses the AST, applies the four arithmetic operators with
/// IEEE-754 semantics and resolves function calls through the builtin table.
///
/// # Responsibilities
/// - Evaluates AST nodes left to right, stopping at the first failure.
/// - Checks builtin arity before evaluating arguments.
/// - Reports unknown functions and arity mismatches.
pub mod evaluator;
/// The lexer module tokenizes one input line for the parser.
///
/// The lexer reads the raw line and produces a finite stream of tokens ending
/// with `END`. Unknown characters are dropped.
///
/// # Responsibilities
/// - Scans numbers, identifiers, keywords and the single-character operators.
/// - Offers a bounded-queue producer as an alternative token source.
/// - Locates unknown characters for strict mode.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// One-token-lookahead recursive descent over two precedence tiers plus
/// primaries.
///
/// # Responsibilities
/// - Converts tokens into expression trees.
/// - Substitutes the last answer for `ans` and for missing left operands.
/// - Surfaces `clear` and `exit` as signals, separate from failures.
pub mod parser;
/// The session module ties the phases together for one line at a time.
///
/// Holds the "last answer" cell and the session configuration, and turns each
/// line into a value, a signal or an error.
pub mod session;
