pub mod card_animated;
pub mod page_header;
pub mod stat_card;
pub mod ui;
