pub mod task;
pub mod ui;
