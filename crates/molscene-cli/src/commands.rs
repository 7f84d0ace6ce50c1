pub mod mesh;
pub mod transpile;
pub mod view;
