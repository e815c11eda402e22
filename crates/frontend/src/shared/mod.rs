pub mod components;
pub mod export;
pub mod icons;
pub mod list_utils;
