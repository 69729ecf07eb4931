//! Dashboard widgets
//!
//! Each submodule turns part of a [`Snapshot`](statusdash_core::Snapshot)
//! into a ratatui widget or a [`table::TableModel`]. None of them touch the
//! terminal; the composer in [`crate::ui`] places them on screen.

pub mod modules;
pub mod panels;
pub mod ports;
pub mod services;
pub mod table;

pub use modules::{module_info, module_list};
pub use ports::ports_table;
pub use services::services_table;
pub use table::{Drawable, NoSeparatorTable, PlainTable, TableModel};
