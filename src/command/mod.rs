//! Command language driving a session
//!
//! ```text
//! reserve "Space 3" 2024-01-01 10:00-11:00 Bus
//! vacate "Space 3"
//! status
//! ```

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::parse;
