//! # DETOUR-DI CORE LIBRARY
//!
//! **NAME-BASED DEPENDENCY INJECTION FOR CALLABLES**
//!
//! **ARCHITECTURE**: Tokenizer -> Registry/Resolver -> Detour Factory -> Injection Facade
//! **GUARANTEE**: Single-threaded, synchronous, no hidden global state
//!
//! A callable's parameter names are recovered from its declaration text (or
//! declared explicitly). When a detour-wrapped callable runs, every parameter
//! whose name is registered in the bound container receives the produced
//! value; the rest receive the caller's positional arguments.

pub mod api;
pub mod config;
pub mod dependencies;
pub mod detour;
pub mod errors;
pub mod injector;
pub mod tokenizer;
pub mod types;

pub use api::*;
