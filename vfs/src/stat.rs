#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    /// Optimal I/O block size
    pub block_size: u64,
    /// Occupying blocks
    pub blocks: u64,
    /// File size
    pub size: u64,
    /// 打开该文件的描述符个数
    pub refs: u64,
    /// 是否仍能通过文件名找到
    pub linked: bool,
}
