//! Rule evaluation for water-quality readings: compares a validated reading
//! against a species threshold table and reports every violated bound.

pub mod alert;
pub mod error;
pub mod evaluator;
pub mod export;
pub mod formatter;
pub mod input;
pub mod sample;
