//! Single-effect filter fragments.
//!
//! Each animation kind compiles to one [`builder::MotionFragment`] whose output is exactly the
//! requested (even) canvas. Builders never fail; see [`builder::build_motion_fragment`].

pub(crate) mod builder;
mod cinemagraph;
mod dolly;
mod kenburns;
mod parallax;
