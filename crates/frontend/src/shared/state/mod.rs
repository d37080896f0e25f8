pub mod filter_state;
pub mod search_state;

pub use filter_state::FilterStateStore;
pub use search_state::SearchStateStore;
