//! Domain types: transactions, money value objects, loyalty programs and the ports
//! the application layer implements.

pub mod money;
pub mod ports;
pub mod program;
pub mod transaction;
