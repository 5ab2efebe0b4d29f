pub mod customer;
pub mod fleet;
pub mod instance;
pub mod time_window;
pub mod travel_matrices;
