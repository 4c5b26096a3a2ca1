#![no_std]

pub mod encode;
pub mod image;
pub mod res;

extern crate alloc;
