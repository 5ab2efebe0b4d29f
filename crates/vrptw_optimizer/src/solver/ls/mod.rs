pub mod add_vehicle;
pub mod cross_exchange;
pub mod intra_relocate;
pub mod local_search;
pub mod r#move;
pub mod neighborhood;
pub mod replace_vehicle;
pub mod two_opt;
