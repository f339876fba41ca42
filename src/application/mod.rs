// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the engine depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The player and session modules consume the ports, never concrete hosts

pub mod port;
