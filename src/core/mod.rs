pub mod breaks;
pub mod logic;
pub mod overtime;
pub mod schedule;
pub mod window;
