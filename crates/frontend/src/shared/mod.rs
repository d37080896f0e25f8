pub mod api_utils;
pub mod components;
pub mod debounce;
pub mod list_utils;
pub mod state;
