//! relnotes library
//!
//! This module exports the assembler and configuration of relnotes for use in
//! integration tests and as a library.

pub mod assemble;
pub mod config;
