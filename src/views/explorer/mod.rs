mod context_menu;
mod explorer_view;

pub use context_menu::{popup_rect, ContextMenuView, MenuHit};
pub use explorer_view::{ExplorerHit, ExplorerView, HeaderButton};
