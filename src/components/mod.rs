//! UI Components
//!
//! Reusable Leptos components.

mod card_item;
mod card_list;
mod notice;
mod scan_dialog;
mod title_bar;

pub use card_item::CardItem;
pub use card_list::CardList;
pub use notice::Notice;
pub use scan_dialog::ScanDialog;
pub use title_bar::TitleBar;
