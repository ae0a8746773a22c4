//! UI layer: the render pipeline components and the interaction controller.

pub mod app;
pub mod components;
