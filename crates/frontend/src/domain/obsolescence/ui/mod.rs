mod widget;

pub use widget::ObsoleteManager;
