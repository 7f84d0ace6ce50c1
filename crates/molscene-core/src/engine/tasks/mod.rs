//! Compilation tasks.
//!
//! Each submodule converts one aspect of the scene. Tasks that consume atoms take
//! the whole atom slice plus a [`crate::engine::context::CompileContext`] and return
//! plain data; [`mesh`] works on OBJ text instead and [`describe`] needs no context.

pub mod camera;
pub mod color;
pub mod describe;
pub mod mesh;
pub mod representation;
pub mod secondary_structure;
