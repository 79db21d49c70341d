//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State structs are plain data; components wrap them in `RwSignal` and
//! mutate them on the UI event loop, so no locking is involved.

pub mod projects;
