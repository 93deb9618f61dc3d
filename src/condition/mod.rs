//! Condition trees, their parsing, normalization and evaluation
//!
//! Source eligibility rules arrive as nested AND/OR trees of comparisons
//! like `Strength >= 400`. This module reads them, expands them into a
//! disjunction of conjunctive groups, and evaluates either form against
//! a set of characteristic values.

mod ast;
mod evaluator;
pub mod normalizer;
pub mod parser;


pub use ast::*;
pub use evaluator::*;
pub use normalizer::*;
pub use parser::*;
