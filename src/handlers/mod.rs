pub mod boards;
pub mod cards;
pub mod columns;
pub mod comments;
pub mod data;
pub mod tags;
