//! Reading tests - verify that extraction interprets package parts correctly.

mod errors;
mod ranges;
