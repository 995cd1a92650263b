//! # 接口层
//!
//! 对调用者提供 open/read/write/resize/close/delete 等操作：
//! 经描述符表找到文件，再经块链读写；只有按名字操作时才查目录。
//!
//! 所有检查都在修改之前完成，失败的调用不会改变任何状态。

use alloc::vec;
use alloc::vec::Vec;

use enumflags2::BitFlags;
use vfs::{AccessMode, Error, OpenFlag, Result, Stat};

use crate::config::MAX_FILE_SIZE;
use crate::directory::Directory;
use crate::fd_table::{FdTable, FileDesc};
use crate::file::File;

#[derive(Debug)]
pub struct Engine {
    directory: Directory,
    fd_table: FdTable,
    /// 单个文件的大小上限
    max_file_size: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub const fn new() -> Self {
        Self::with_max_file_size(MAX_FILE_SIZE)
    }

    pub const fn with_max_file_size(max_file_size: usize) -> Self {
        Self {
            directory: Directory::new(),
            fd_table: FdTable::new(),
            max_file_size,
        }
    }

    #[inline]
    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// 打开文件并返回描述符
    ///
    /// - 文件不存在：带 [`OpenFlag::CREATE`] 时创建空文件，否则返回 [`Error::NoFile`]
    /// - 文件存在：带 [`OpenFlag::CREATE`] 时清空其内容，
    ///   已打开的描述符随即看到长度为零的文件
    pub fn open(&mut self, name: &str, flags: BitFlags<OpenFlag>) -> Result<usize> {
        let mode = AccessMode::from_flags(flags);
        let create = flags.contains(OpenFlag::CREATE);

        let id = match self.directory.find(name) {
            Some(id) => {
                if create {
                    if let Some(file) = self.directory.get_mut(id) {
                        log::debug!("truncate {name:?} on reopen, drop {} bytes", file.len());
                        file.chain.clear();
                    }
                }
                id
            }
            None if create => self.directory.create(name).ok_or(Error::NoFile)?,
            None => return Err(Error::NoFile),
        };

        self.directory.acquire(id).ok_or(Error::NoFile)?;
        let fd = self.fd_table.allocate(id, mode);
        log::trace!("open {name:?} as fd {fd} ({mode:?})");

        Ok(fd)
    }

    /// 在游标处写入全部`buf`并推进游标，要么全部写入，要么什么都不做
    pub fn write(&mut self, fd: usize, buf: &[u8]) -> Result<usize> {
        let max_file_size = self.max_file_size;
        let (desc, file) = self.lookup(fd)?;

        if !desc.mode.writable {
            return Err(Error::NoPermission);
        }

        if desc
            .offset
            .checked_add(buf.len())
            .is_none_or(|end| end > max_file_size)
        {
            return Err(Error::NoMem);
        }

        let written = file.chain.write_at(desc.offset, buf);
        desc.offset += written;
        log::trace!("fd {fd}: write {written} bytes, offset {}", desc.offset);

        Ok(written)
    }

    /// 从游标处读出数据填充`buf`并推进游标，到达文件末尾时返回 0
    pub fn read(&mut self, fd: usize, buf: &mut [u8]) -> Result<usize> {
        let (desc, file) = self.lookup(fd)?;

        if !desc.mode.readable {
            return Err(Error::NoPermission);
        }

        let read = file.chain.read_at(desc.offset, buf);
        desc.offset += read;
        log::trace!("fd {fd}: read {read} bytes, offset {}", desc.offset);

        Ok(read)
    }

    /// 读出至多`max_len`字节
    pub fn read_to_vec(&mut self, fd: usize, max_len: usize) -> Result<Vec<u8>> {
        let (desc, file) = self.lookup(fd)?;
        if !desc.mode.readable {
            return Err(Error::NoPermission);
        }

        let available = file.len().saturating_sub(desc.offset).min(max_len);
        let mut buf = vec![0; available];
        let read = self.read(fd, &mut buf)?;
        buf.truncate(read);

        Ok(buf)
    }

    /// 调整文件长度，并把该文件上所有越界的游标拉回到新的末尾
    pub fn resize(&mut self, fd: usize, new_len: usize) -> Result<()> {
        let max_file_size = self.max_file_size;
        let (desc, file) = self.lookup(fd)?;

        if !desc.mode.writable {
            return Err(Error::NoPermission);
        }

        if new_len > max_file_size {
            return Err(Error::NoMem);
        }

        let id = desc.file;
        log::trace!("fd {fd}: resize {} -> {new_len}", file.len());
        file.chain.truncate_to(new_len);
        self.fd_table.clamp_offsets(id, new_len);

        Ok(())
    }

    /// 关闭描述符；已删除名字的文件在最后一次关闭时销毁
    pub fn close(&mut self, fd: usize) -> Result<()> {
        let desc = self.fd_table.free(fd)?;
        self.directory.release(desc.file).ok_or(Error::NoFile)?;
        log::trace!("close fd {fd}");

        Ok(())
    }

    /// 删除文件名；仍被打开的文件推迟到最后一次关闭时销毁
    pub fn delete(&mut self, name: &str) -> Result<()> {
        self.directory.unlink(name).ok_or(Error::NoFile)
    }

    pub fn stat(&self, fd: usize) -> Result<Stat> {
        let desc = self.fd_table.get(fd)?;
        self.directory
            .get(desc.file)
            .map(File::stat)
            .ok_or(Error::NoFile)
    }

    /// 无视引用计数销毁所有文件，并关闭全部描述符
    pub fn destroy_all(&mut self) {
        log::debug!(
            "destroy {} files, close {} descriptors",
            self.directory.len(),
            self.fd_table.len()
        );
        self.directory.clear();
        self.fd_table.clear();
    }

    /// 是否存在该名字的文件
    #[inline]
    pub fn exists(&self, name: &str) -> bool {
        self.directory.find(name).is_some()
    }

    /// 存活的文件个数，包括已删除名字但仍被打开的文件
    #[inline]
    pub fn file_count(&self) -> usize {
        self.directory.len()
    }

    /// 已打开的描述符个数
    #[inline]
    pub fn fd_count(&self) -> usize {
        self.fd_table.len()
    }

    /// 已命名文件的名字，按字典序
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.directory.names()
    }
}

impl Engine {
    /// 取出描述符及其指向的文件
    fn lookup(&mut self, fd: usize) -> Result<(&mut FileDesc, &mut File)> {
        let desc = self.fd_table.get_mut(fd)?;
        let file = self.directory.get_mut(desc.file).ok_or(Error::NoFile)?;
        Ok((desc, file))
    }
}
