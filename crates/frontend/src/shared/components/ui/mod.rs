pub mod badge;
pub mod progress;

pub use badge::StatusBadge;
pub use progress::ProgressBar;
