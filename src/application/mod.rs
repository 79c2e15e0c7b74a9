//! Application layer implementing the domain ports.
//!
//! `cashback` holds the loyalty rule engine, `masker` the card number masking used when
//! card numbers are shown to the customer.

pub mod cashback;
pub mod masker;
