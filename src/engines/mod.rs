pub mod governance;
pub mod strategy;
