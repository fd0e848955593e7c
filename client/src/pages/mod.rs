//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages that need the session receive it as a prop from
//! `App`.

pub mod dashboard;
pub mod landing;
pub mod login;
