#![allow(dead_code)]

pub mod capabilities;
pub mod pipeline;
