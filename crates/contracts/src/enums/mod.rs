pub mod badge_tone;
pub mod order_status;
pub mod sourcing_status;
pub mod supplier_status;
pub mod user_role;

pub use badge_tone::BadgeTone;
pub use order_status::OrderStatus;
pub use sourcing_status::SourcingStatus;
pub use supplier_status::SupplierStatus;
pub use user_role::{UserRole, UserStatus};
