//! Infrastructure layer for the manager application.
//!
//! Contains OS-facing adapters: the registry (and file) stores holding the
//! `Scancode Map` blob, the reboot/elevation controls, and configuration
//! file storage.
//!
//! **Dependency rule**: this layer may depend on `keyremap_core`, but MUST
//! NOT be imported by the domain layer.  The `application` layer only sees
//! the traits declared here, never a concrete OS implementation.

pub mod power;
pub mod registry;
pub mod storage;
