pub mod identifiers;
pub mod ranges;
