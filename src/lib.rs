#![doc = include_str!("../README.md")]

mod batch;
mod generator;
mod render;
mod ticket;

pub use batch::{BatchParams, generate_batch};
pub use generator::{Generator, generate};
pub use render::{
    render_batch_boxed, render_batch_plain, render_boxed, render_plain, render_ticket,
};
pub use ticket::Ticket;
