// src/makers/mod.rs

pub mod maker_trait;
pub mod registry;
pub mod simple;
