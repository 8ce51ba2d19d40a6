//! Vigia - report safety classifier with single-fault tolerance
//!
//! A report is an ordered run of integer levels. It is safe when the levels
//! move in one direction with every step between 1 and 3. Under fault
//! tolerance a report also counts as safe when dropping one level makes it
//! safe. This library provides the classifier pipeline, a text parser for
//! report files, and renderers for the counts.

pub mod cli;
pub mod config;
pub mod counter;
pub mod csv_output;
pub mod json_output;
pub mod parser;
pub mod report;
pub mod safety;
pub mod summary;
