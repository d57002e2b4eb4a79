pub mod badge;
pub mod button;
pub mod button_group;
pub mod card;
pub mod dropdown_menu;
pub mod form;
pub mod input;
pub mod sidebar;
pub mod tooltip;
