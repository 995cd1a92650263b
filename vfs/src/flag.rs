use enumflags2::{BitFlags, bitflags};

#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[bitflags]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenFlag {
    /// 创建文件，若文件存在则清空
    CREATE = 0b0001,
    /// 只读
    RDONLY = 0b0010,
    /// 只写
    WRONLY = 0b0100,
    /// 读写兼备
    RDWR   = 0b1000,
}

impl OpenFlag {
    #[inline]
    pub fn create() -> BitFlags<OpenFlag> {
        OpenFlag::CREATE.into()
    }

    #[inline]
    pub fn read_only() -> BitFlags<OpenFlag> {
        OpenFlag::RDONLY.into()
    }

    #[inline]
    pub fn write_only() -> BitFlags<OpenFlag> {
        OpenFlag::WRONLY.into()
    }
}

/// 描述符的读写权限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessMode {
    pub readable: bool,
    pub writable: bool,
}

impl AccessMode {
    pub const READ_WRITE: Self = Self {
        readable: true,
        writable: true,
    };

    /// 未给出任何读写标志时按读写兼备处理
    pub fn from_flags(flags: BitFlags<OpenFlag>) -> Self {
        let mode = flags & (OpenFlag::RDONLY | OpenFlag::WRONLY | OpenFlag::RDWR);
        if mode.is_empty() {
            return Self::READ_WRITE;
        }

        Self {
            readable: mode.intersects(OpenFlag::RDONLY | OpenFlag::RDWR),
            writable: mode.intersects(OpenFlag::WRONLY | OpenFlag::RDWR),
        }
    }
}

#[cfg(test)]
mod tests {
    use enumflags2::BitFlags;

    use super::{AccessMode, OpenFlag};

    #[test]
    fn default_mode_is_read_write() {
        assert_eq!(AccessMode::from_flags(BitFlags::empty()), AccessMode::READ_WRITE);
        assert_eq!(AccessMode::from_flags(OpenFlag::create()), AccessMode::READ_WRITE);
    }

    #[test]
    fn explicit_modes() {
        let ro = AccessMode::from_flags(OpenFlag::CREATE | OpenFlag::RDONLY);
        assert!(ro.readable && !ro.writable);

        let wo = AccessMode::from_flags(OpenFlag::write_only());
        assert!(!wo.readable && wo.writable);

        let rw = AccessMode::from_flags(OpenFlag::RDWR.into());
        assert_eq!(rw, AccessMode::READ_WRITE);
    }
}
