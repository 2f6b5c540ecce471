//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in the library's `model`)
//! - Logic (pure business logic in the library's `logic`)
//! - Handlers (in src/handlers/)
//! - UI rendering (in src/ui/)
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability and maintainability.

pub(crate) mod documents;
pub(crate) mod filters;
pub(crate) mod navigation;
pub(crate) mod selection;
pub(crate) mod sorting;
