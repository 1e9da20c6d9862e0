pub mod classify;
pub mod eligible;
pub mod score;
