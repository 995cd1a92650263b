use derive_more::Display;

pub type Result<T> = core::result::Result<T, Error>;

/// 文件操作的错误，随每次调用返回，而非存于全局
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// 文件描述符无效，或文件名不存在
    #[display(fmt = "no such file or descriptor")]
    NoFile,
    /// 打开方式不允许此操作
    #[display(fmt = "operation not permitted by open mode")]
    NoPermission,
    /// 超出文件大小上限
    #[display(fmt = "file size limit exceeded")]
    NoMem,
}

impl core::error::Error for Error {}
