//! Small pure helpers shared across the request pipeline.

pub mod links;
