//! Syntax tree for command scripts

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A node with its source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// `reserve <space> <date> <time-slot> <vehicle>`
#[derive(Debug, Clone, PartialEq)]
pub struct ReserveCommand {
    pub space: Spanned<String>,
    pub date: Spanned<String>,
    pub time_slot: Spanned<String>,
    pub vehicle: Spanned<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Reserve(ReserveCommand),
    /// `vacate <space>`
    Vacate { space: Spanned<String> },
    /// Full status block
    Status,
    /// List the space identifiers
    Spaces,
    /// List the vehicle types with their multipliers
    Vehicles,
    Help,
    /// Stop executing the rest of the script
    Quit,
}

/// A parsed script
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    pub commands: Vec<Spanned<Command>>,
}
