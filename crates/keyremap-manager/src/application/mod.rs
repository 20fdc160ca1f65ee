//! Application layer use cases for the manager.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules) and the infrastructure (registry, files, OS calls).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "make Caps
//!   Lock act as Ctrl and store that so it survives a reboot").
//! - **Depend on abstractions** (traits) rather than concrete implementations,
//!   so the registry can be swapped for a file or an in-memory store.
//! - **Contain no OS calls** of their own.
//!
//! # Sub-modules
//!
//! - **`edit_remaps`** – The remap editing session: load the stored map,
//!   change rules, preview the blob, save it, or reset it.

pub mod edit_remaps;
