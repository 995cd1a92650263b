use userfs::{BitFlags, Error, OpenFlag, global};

// 单独的测试进程，清理全局引擎不会影响其它测试
#[test]
fn destroy_all_resets_global_engine() {
    let a = global::open("teardown-a", OpenFlag::create()).unwrap();
    global::write(a, b"data").unwrap();
    let b = global::open("teardown-b", OpenFlag::create()).unwrap();

    global::destroy_all();

    assert_eq!(global::write(a, b"x"), Err(Error::NoFile));
    assert_eq!(global::close(b), Err(Error::NoFile));
    assert_eq!(global::open("teardown-a", BitFlags::empty()), Err(Error::NoFile));
    global::exclusive_session(|fs| {
        assert_eq!(fs.file_count(), 0);
        assert_eq!(fs.fd_count(), 0);
    });
}
