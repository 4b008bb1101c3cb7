pub mod doubt;
pub mod history;
pub mod study;
pub mod summary;
