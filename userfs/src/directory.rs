//! # 目录层
//!
//! 文件名到文件的映射，同时持有所有存活的文件(包括已删除名字但仍被打开的)。

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::collections::SlotVec;
use crate::file::{File, FileId};

#[derive(Debug, Default)]
pub struct Directory {
    entries: BTreeMap<String, FileId>,
    files: SlotVec<File>,
}

impl Directory {
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            files: SlotVec::new(),
        }
    }

    /// 根据文件名获取文件
    #[inline]
    pub fn find(&self, name: &str) -> Option<FileId> {
        self.entries.get(name).copied()
    }

    /// 创建空文件，已有同名项时返回空
    pub fn create(&mut self, name: &str) -> Option<FileId> {
        if self.entries.contains_key(name) {
            return None;
        }

        let id = FileId(self.files.insert(File::new(name.to_string())));
        self.entries.insert(name.to_string(), id);
        log::debug!("create file {name:?} as {id:?}");

        Some(id)
    }

    /// 移除名字；文件无引用时立即销毁，否则推迟到最后一个描述符关闭
    pub fn unlink(&mut self, name: &str) -> Option<()> {
        let id = self.entries.remove(name)?;
        let file = self.files.get_mut(id.0)?;

        if file.refs == 0 {
            self.destroy(id);
        } else {
            file.name = None;
            log::debug!("unlink {name:?}, destruction deferred ({} refs)", file.refs);
        }

        Some(())
    }

    /// 增加一次引用
    pub fn acquire(&mut self, id: FileId) -> Option<&mut File> {
        let file = self.files.get_mut(id.0)?;
        file.refs += 1;
        Some(file)
    }

    /// 减少一次引用，无名文件的最后一次引用释放时销毁文件
    pub fn release(&mut self, id: FileId) -> Option<()> {
        let file = self.files.get_mut(id.0)?;
        debug_assert!(file.refs > 0);
        file.refs = file.refs.saturating_sub(1);

        if file.refs == 0 && file.name.is_none() {
            self.destroy(id);
        }

        Some(())
    }

    #[inline]
    pub fn get(&self, id: FileId) -> Option<&File> {
        self.files.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: FileId) -> Option<&mut File> {
        self.files.get_mut(id.0)
    }

    /// 存活的文件个数
    #[inline]
    pub fn len(&self) -> usize {
        self.files.count()
    }

    /// 已命名文件的名字，按字典序
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// 无视引用计数销毁所有文件
    pub fn clear(&mut self) {
        self.entries.clear();
        self.files.clear();
    }

    fn destroy(&mut self, id: FileId) {
        if let Some(file) = self.files.remove(id.0) {
            log::debug!("destroy {id:?}, release {} blocks", file.chain.block_count());
        }
    }
}
