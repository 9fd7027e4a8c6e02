pub mod aggregate;
pub mod calendar;
pub mod dividend;
pub mod filter;
pub mod holding;
pub mod settings;
pub mod snapshot;
pub mod sort;
pub mod view;
pub mod window;
