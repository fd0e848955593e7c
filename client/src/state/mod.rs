//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `auth_form`, `nav`) so pages depend on
//! small focused models. Structs here are plain values; pages wrap them in
//! `RwSignal`s and pass them down as props.

pub mod auth;
pub mod auth_form;
pub mod nav;
