pub mod processes;

pub use processes::treasury::TreasuryManager;
