pub mod sort_option;

pub use sort_option::SortOption;
