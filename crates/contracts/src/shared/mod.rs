pub mod format;
pub mod selection;
