pub mod edit_button;
pub mod expense_list;
pub mod expense_row;
pub mod flag_preview;
pub mod nav_bar;
pub mod notice;

pub use edit_button::EditButton;
pub use expense_list::ExpenseList;
pub use expense_row::ExpenseRowCard;
pub use flag_preview::FlagPreview;
pub use nav_bar::NavBar;
pub use notice::NoticeBanner;
