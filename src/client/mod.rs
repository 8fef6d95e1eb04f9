pub mod dashboard;
pub mod session;
pub mod tabs;
pub mod toast;
