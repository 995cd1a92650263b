#![no_std]

mod error;
mod flag;
mod stat;

pub use self::{
    error::{Error, Result},
    flag::{AccessMode, OpenFlag},
    stat::Stat,
};
