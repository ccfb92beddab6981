//! Client-side graph state: grid layout and render-element translation.

pub mod elements;
pub mod layout;
