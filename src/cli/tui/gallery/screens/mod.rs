pub mod failed;
pub mod gallery;
pub mod loading;
