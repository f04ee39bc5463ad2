pub mod confirm_exit;
pub mod header;
pub mod toaster;
