//! # 块链层
//!
//! 文件数据按 [`BLOCK_SIZE`] 切分成块，依次存放在 [`BlockChain`] 中：
//! 字节偏移除以块大小得到块索引，取模得到块内偏移。
//!
//! 除最后一块外，每块都是满的；长度为 L 的块链恰有 `ceil(L / BLOCK_SIZE)` 块。

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::config::BLOCK_SIZE;

type DataBlock = [u8; BLOCK_SIZE];

/// 存储分配的单位
#[derive(Debug)]
pub struct Block {
    data: Box<DataBlock>,
    /// 已占用的字节数
    occupied: usize,
}

impl Block {
    fn new() -> Self {
        Self {
            data: Box::new([0; BLOCK_SIZE]),
            occupied: 0,
        }
    }

    /// 把占用量扩大到 `occupied`，新纳入的字节一律清零
    fn grow_to(&mut self, occupied: usize) {
        debug_assert!(occupied <= BLOCK_SIZE);
        if occupied > self.occupied {
            self.data[self.occupied..occupied].fill(0);
            self.occupied = occupied;
        }
    }
}

/// 属于某个文件的有序块序列
#[derive(Debug, Default)]
pub struct BlockChain {
    blocks: Vec<Block>,
    /// 逻辑长度，恒等于各块占用量之和
    len: usize,
}

impl BlockChain {
    pub const fn new() -> Self {
        Self {
            blocks: Vec::new(),
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// 从指定位置(字节偏移)读出数据填充`buf`，不会越过逻辑长度
    pub fn read_at(&self, offset: usize, buf: &mut [u8]) -> usize {
        let mut start = offset;
        let end = offset.saturating_add(buf.len()).min(self.len);

        if start >= end {
            return 0;
        }

        // 已读取多少字节
        let mut read_size = 0;
        loop {
            let block_index = start / BLOCK_SIZE;
            // 当前块的末地址(字节)
            let current_block_end = ((block_index + 1) * BLOCK_SIZE).min(end);
            let block_read_size = current_block_end - start;
            // 绝对地址 % 块大小 = 块内偏移
            let inner = start % BLOCK_SIZE;

            buf[read_size..read_size + block_read_size]
                .copy_from_slice(&self.blocks[block_index].data[inner..inner + block_read_size]);

            read_size += block_read_size;

            if current_block_end == end {
                break;
            }

            start = current_block_end;
        }

        read_size
    }

    /// 从指定位置写入`buf`，空间不足时先追加新块。
    ///
    /// 若`offset`在逻辑长度之后，中间的空隙以零填充。
    pub fn write_at(&mut self, offset: usize, buf: &[u8]) -> usize {
        if buf.is_empty() {
            return 0;
        }

        let mut start = offset;
        let end = offset + buf.len();
        if end > self.len {
            self.expand_to(end);
        }

        let mut written_size = 0;
        loop {
            let block_index = start / BLOCK_SIZE;
            let current_block_end = ((block_index + 1) * BLOCK_SIZE).min(end);
            let block_write_size = current_block_end - start;
            let inner = start % BLOCK_SIZE;

            self.blocks[block_index].data[inner..inner + block_write_size]
                .copy_from_slice(&buf[written_size..written_size + block_write_size]);

            written_size += block_write_size;

            if current_block_end == end {
                break;
            }

            start = current_block_end;
        }

        written_size
    }

    /// 调整逻辑长度，增长部分读出为零，缩短时释放多余的块
    pub fn truncate_to(&mut self, new_len: usize) {
        if new_len > self.len {
            self.expand_to(new_len);
        } else if new_len < self.len {
            self.shrink_to(new_len);
        }
    }

    /// 释放全部块
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.len = 0;
    }

    fn expand_to(&mut self, larger_len: usize) {
        debug_assert!(larger_len > self.len);

        // 原来的最后一块也可能要补满
        let first_touched = self.blocks.len().saturating_sub(1);
        self.blocks
            .resize_with(larger_len.div_ceil(BLOCK_SIZE), Block::new);

        for (block_index, block) in self.blocks.iter_mut().enumerate().skip(first_touched) {
            block.grow_to((larger_len - block_index * BLOCK_SIZE).min(BLOCK_SIZE));
        }

        self.len = larger_len;
    }

    fn shrink_to(&mut self, smaller_len: usize) {
        debug_assert!(smaller_len < self.len);

        let total_blocks = smaller_len.div_ceil(BLOCK_SIZE);
        self.blocks.truncate(total_blocks);
        if let Some(last) = self.blocks.last_mut() {
            last.occupied = smaller_len - (total_blocks - 1) * BLOCK_SIZE;
        }

        self.len = smaller_len;
    }
}
