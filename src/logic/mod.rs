//! Pure business logic
//!
//! Functions here take plain values and return plain values. They never
//! touch the terminal, the repository or any other runtime state.

pub mod breadcrumb;
pub mod document;
pub mod formatting;
pub mod layout;
pub mod navigation;
pub mod search;
pub mod selection;
pub mod sorting;
pub mod ui;
