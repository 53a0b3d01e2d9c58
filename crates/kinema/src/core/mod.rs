pub mod collision;
pub mod motion;
pub mod scene;
pub mod time;
pub mod vector;
