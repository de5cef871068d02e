//! Skill Sorter - two-round skill classification with shareable results
//!
//! Each skill in a catalog is judged twice, first for enjoyment and then
//! for proficiency. Every vote carries an intensity taken from how long it
//! was held. The two answers place the skill in one of four quadrants, and
//! the finished classification travels as a compact URL-safe token.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
