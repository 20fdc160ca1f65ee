//! Domain entities for KeyRemap.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain** (or "entities" layer).  Domain code:
//!
//! - Contains the core business rules of the application.
//! - Has **no** imports from OS APIs, the registry, file systems, or UI
//!   frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Here the domain is a single concept: an ordered set of key remap rules
//! that one editing session owns and eventually serialises into the
//! `Scancode Map` registry value.

/// Remap rules and the editable configuration that owns them.
///
/// See [`remap::RemapConfiguration`] for the main type.
pub mod remap;
