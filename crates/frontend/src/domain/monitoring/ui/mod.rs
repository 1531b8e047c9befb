mod charts;
mod widget;

pub use widget::SalesMonitor;
