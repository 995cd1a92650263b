use alloc::string::String;

use vfs::Stat;

use crate::block::BlockChain;
use crate::config::BLOCK_SIZE;

/// 文件在目录中的编号
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FileId(pub(crate) usize);

/// 内存中的文件
///
/// 名字被删除后文件仍可经已打开的描述符访问；
/// 无名且无引用的文件会被立即销毁。
#[derive(Debug)]
pub struct File {
    /// 为空表示已从目录中移除
    pub(crate) name: Option<String>,
    pub(crate) chain: BlockChain,
    /// 打开该文件的描述符个数
    pub(crate) refs: usize,
}

impl File {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name: Some(name),
            chain: BlockChain::new(),
            refs: 0,
        }
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    pub fn refs(&self) -> usize {
        self.refs
    }

    pub fn stat(&self) -> Stat {
        Stat {
            block_size: BLOCK_SIZE as u64,
            blocks: self.chain.block_count() as u64,
            size: self.chain.len() as u64,
            refs: self.refs() as u64,
            linked: self.name().is_some(),
        }
    }
}
