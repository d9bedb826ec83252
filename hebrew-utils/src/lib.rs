//! Shared Hebrew text utilities and grammatical vocabulary for the verb
//! extraction pipeline.

pub mod grammar;
pub mod text;

pub use grammar::{Gender, Number, Person, Stem, Tense};
