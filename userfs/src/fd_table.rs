//! # 文件描述符层
//!
//! 每个描述符表示以特定读写属性打开的文件，并持有独立的游标。

use vfs::{AccessMode, Error, Result};

use crate::collections::SlotVec;
use crate::file::FileId;

/// 打开的文件
#[derive(Debug, Clone)]
pub struct FileDesc {
    pub file: FileId,
    pub mode: AccessMode,
    /// **文件**内的偏移量
    pub offset: usize,
}

#[derive(Debug, Default)]
pub struct FdTable {
    slots: SlotVec<FileDesc>,
}

impl FdTable {
    pub const fn new() -> Self {
        Self {
            slots: SlotVec::new(),
        }
    }

    /// 分配编号最小的空闲描述符
    pub fn allocate(&mut self, file: FileId, mode: AccessMode) -> usize {
        self.slots.insert(FileDesc {
            file,
            mode,
            offset: 0,
        })
    }

    pub fn get(&self, fd: usize) -> Result<&FileDesc> {
        self.slots.get(fd).ok_or(Error::NoFile)
    }

    pub fn get_mut(&mut self, fd: usize) -> Result<&mut FileDesc> {
        self.slots.get_mut(fd).ok_or(Error::NoFile)
    }

    pub fn free(&mut self, fd: usize) -> Result<FileDesc> {
        self.slots.remove(fd).ok_or(Error::NoFile)
    }

    /// 把`file`上所有超出`len`的游标拉回到`len`
    pub fn clamp_offsets(&mut self, file: FileId, len: usize) {
        self.slots
            .iter_mut()
            .filter(|(_, desc)| desc.file == file)
            .for_each(|(_, desc)| desc.offset = desc.offset.min(len));
    }

    /// 已打开的描述符个数
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.count()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use vfs::{AccessMode, Error};

    use super::FdTable;
    use crate::file::FileId;

    #[test]
    fn freed_descriptor_is_invalid_and_reused() {
        let mut table = FdTable::new();
        let a = table.allocate(FileId(0), AccessMode::READ_WRITE);
        let b = table.allocate(FileId(1), AccessMode::READ_WRITE);
        assert_eq!((a, b), (0, 1));

        table.free(a).unwrap();
        assert_eq!(table.get(a).unwrap_err(), Error::NoFile);
        assert_eq!(table.free(a).unwrap_err(), Error::NoFile);
        assert_eq!(table.get(99).unwrap_err(), Error::NoFile);

        assert_eq!(table.allocate(FileId(2), AccessMode::READ_WRITE), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn clamp_only_touches_the_given_file() {
        let mut table = FdTable::new();
        let a = table.allocate(FileId(0), AccessMode::READ_WRITE);
        let b = table.allocate(FileId(0), AccessMode::READ_WRITE);
        let c = table.allocate(FileId(1), AccessMode::READ_WRITE);
        table.get_mut(a).unwrap().offset = 100;
        table.get_mut(b).unwrap().offset = 10;
        table.get_mut(c).unwrap().offset = 100;

        table.clamp_offsets(FileId(0), 50);
        assert_eq!(table.get(a).unwrap().offset, 50);
        assert_eq!(table.get(b).unwrap().offset, 10);
        assert_eq!(table.get(c).unwrap().offset, 100);
    }
}
