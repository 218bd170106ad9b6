pub mod import_modal;
pub mod sidebar;
pub mod table;
pub mod toast;
