#![no_std]

extern crate alloc;

/* userfs 的整体架构，自上而下 */

// 接口层：实现文件打开、读写、调整大小、删除等操作
mod engine;
pub use engine::Engine;

// 进程级的默认引擎
pub mod global;

// 文件描述符层：描述符编号到打开文件的映射
mod fd_table;

// 目录层：文件名到文件的映射
mod directory;
mod file;

// 块链层：按块存放文件数据
mod block;

mod collections;
pub mod config;

pub use config::{BLOCK_SIZE, MAX_FILE_SIZE};
pub use enumflags2::BitFlags;
pub use vfs::{AccessMode, Error, OpenFlag, Result, Stat};
