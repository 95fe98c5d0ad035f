pub mod listing;
pub mod paths;
pub mod roots;
