pub mod difficulty;
pub mod failed;
pub mod pending;
pub mod quiz;
pub mod summary;
pub mod theme;
pub mod tutor;
