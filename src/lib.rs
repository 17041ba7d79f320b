pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod lending;
pub mod overdue;
pub mod readers;
pub mod utils;
