pub mod api;
pub mod filter_bar;
pub mod icons;
