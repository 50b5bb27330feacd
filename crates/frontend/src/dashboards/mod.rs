pub mod d400_analytics;
pub mod d401_admin_overview;
