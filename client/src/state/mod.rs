//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`items`, `ui`, `toast`) so components depend
//! on small focused models. Each is provided as an `RwSignal` context by
//! the root `App`.

pub mod items;
pub mod toast;
pub mod ui;
