//! Drives the parser over a whole source buffer and hands each parsed
//! function to a lowering collaborator, recovering from parse errors.

pub mod driver;
