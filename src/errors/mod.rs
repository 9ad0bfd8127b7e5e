//! Lexing and parsing errors.
//!
//! Every failure is a single `Error`: what went wrong (`ErrorImpl`) and the
//! byte offset it was detected at. There is no recovery, so the first error
//! ends the run.

pub mod errors;

#[cfg(test)]
mod tests;
