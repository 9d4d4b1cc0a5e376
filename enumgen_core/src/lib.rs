//! `enumgen_core` is the core library for the enumgen code generator. It
//! turns a declarative options object (an ordered list of member
//! descriptors plus naming strings) into enum boilerplate source code by
//! filling placeholder tokens in a text template.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Options file (enumgen.toml)
//!   → Options loader (parses TOML, resolves the template text)
//!   → Fragment builders (per-value declaration / iterator / lookup blocks)
//!   → Engine (table-driven literal substitution of placeholder tokens)
//!   → Writer (creates parent directories, writes the generated file)
//! ```
//!
//! ## Key Types
//!
//! - [`GenerationOptions`] — the complete generation request: template text,
//!   naming strings, and the ordered value sequence.
//! - [`EnumValue`] — one member descriptor: name, comment, and whether the
//!   member's numeric value is derived from a name hash.
//! - [`Placeholder`] — the fixed table of recognized placeholder tokens.
//! - [`OptionsFile`] — the on-disk TOML form of a generation request.
//! - [`EnumgenError`] — everything that can go wrong outside the pure core.
//!
//! ## Quick Start
//!
//! ```rust
//! use enumgen_core::EnumValue;
//! use enumgen_core::GenerationOptions;
//! use enumgen_core::generate;
//!
//! let options = GenerationOptions {
//! 	template: "enum #ENUM_NAME# {\n#VALUES#\n}\n".to_string(),
//! 	enum_name: "Direction".to_string(),
//! 	values: vec![EnumValue::new("North", "Top of the map", false)],
//! 	..GenerationOptions::default()
//! };
//!
//! let code = generate(&options);
//! assert!(code.contains("North,"));
//! ```
//!
//! The engine itself is a pure function with no I/O; persistence lives in
//! the [`writer`] module and configuration loading in [`config`].

pub use config::*;
pub use engine::*;
pub use error::*;
pub use fragments::name_hash;
pub use options::*;
pub use tokens::*;
pub use writer::*;

pub mod config;
mod engine;
mod error;
pub mod fragments;
mod options;
mod tokens;
mod writer;

#[cfg(test)]
mod __fixtures;
