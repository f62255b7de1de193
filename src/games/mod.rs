//! Game rules.

pub mod word_decoder;
