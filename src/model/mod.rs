//! Pure data structures shared by the principle modules.

pub mod principle;
pub mod user;

pub use principle::*;
pub use user::*;
