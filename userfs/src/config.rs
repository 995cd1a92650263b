//! Constants used in userfs

/// 块的容量，即存储分配的单位
pub const BLOCK_SIZE: usize = 512;

/// 单个文件的默认大小上限，100MiB
pub const MAX_FILE_SIZE: usize = 100 * 1024 * 1024;
