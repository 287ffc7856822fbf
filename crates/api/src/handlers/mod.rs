pub mod alerts;
pub mod pages;
