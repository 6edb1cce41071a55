pub mod clipboard;
pub mod components;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod theme;
pub mod toast;
