//! Text markup handling shared by migrations and analyzers

pub mod html;
pub mod markdown;
