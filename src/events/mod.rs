pub mod navigation;
pub mod pointer;

pub use navigation::{wire_navigation, Navigator};
pub use pointer::{wire_card_spotlight, wire_pointer_tracking, wire_resize};
