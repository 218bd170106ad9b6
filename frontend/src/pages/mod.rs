pub mod admin;
pub mod employee_form;
pub mod employees;
pub mod login;
pub mod register_shift;
pub mod reports;
pub mod shift_history;
pub mod shifts;
