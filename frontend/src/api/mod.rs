mod auth;
pub mod client;
mod employees;
pub mod reports;
mod shifts;
pub mod types;

pub use client::*;
pub use employees::{EMPLOYEES_IMPORTED_MESSAGE, EMPLOYEE_SAVED_MESSAGE};
pub use reports::ShiftRange;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
