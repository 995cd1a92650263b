//! # 进程级文件系统
//!
//! 进程内共享的默认 [`Engine`]。每次调用都在持锁期间完成，
//! 由这把锁保证对引擎的访问是串行的。
//!
//! 需要相互独立的文件系统时，直接创建 [`Engine`] 实例即可。

use alloc::vec::Vec;

use enumflags2::BitFlags;
use spin::Mutex;
use vfs::{OpenFlag, Result, Stat};

use crate::Engine;

static ENGINE: Mutex<Engine> = Mutex::new(Engine::new());

/// 持锁执行一系列操作，期间其它调用者无法插入
pub fn exclusive_session<F, V>(f: F) -> V
where
    F: FnOnce(&mut Engine) -> V,
{
    f(&mut *ENGINE.lock())
}

#[inline]
pub fn open(name: &str, flags: BitFlags<OpenFlag>) -> Result<usize> {
    ENGINE.lock().open(name, flags)
}

#[inline]
pub fn write(fd: usize, buf: &[u8]) -> Result<usize> {
    ENGINE.lock().write(fd, buf)
}

#[inline]
pub fn read(fd: usize, buf: &mut [u8]) -> Result<usize> {
    ENGINE.lock().read(fd, buf)
}

#[inline]
pub fn read_to_vec(fd: usize, max_len: usize) -> Result<Vec<u8>> {
    ENGINE.lock().read_to_vec(fd, max_len)
}

#[inline]
pub fn resize(fd: usize, new_len: usize) -> Result<()> {
    ENGINE.lock().resize(fd, new_len)
}

#[inline]
pub fn close(fd: usize) -> Result<()> {
    ENGINE.lock().close(fd)
}

#[inline]
pub fn delete(name: &str) -> Result<()> {
    ENGINE.lock().delete(name)
}

#[inline]
pub fn stat(fd: usize) -> Result<Stat> {
    ENGINE.lock().stat(fd)
}

pub fn destroy_all() {
    ENGINE.lock().destroy_all()
}
