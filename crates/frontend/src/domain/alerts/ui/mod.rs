mod widget;

pub use widget::AlertCenter;
