pub mod camera;
pub mod r#loop;
pub mod pellets;
pub mod snake;
pub mod world;
