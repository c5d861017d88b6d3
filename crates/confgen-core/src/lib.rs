//! Core library for confgen.
//!
//! Provides the pieces the `confgen` binary composes into its batch loop:
//! template loading ([`template::Template`]), delimited-table parsing
//! ([`table::Table`]), placeholder substitution ([`subst::substitute`]), and
//! output writing ([`writer`]). Everything is synchronous; the only side
//! effects live in the writer.

pub mod error;
pub mod subst;
pub mod table;
pub mod template;
pub mod writer;
