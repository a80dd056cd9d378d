pub mod carousels;
pub mod search;
