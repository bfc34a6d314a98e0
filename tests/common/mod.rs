#![allow(dead_code)]

use std::ffi::OsString;
use std::sync::Once;

/// Restores (or unsets) the variable to its previous value when dropped.
pub struct EnvGuard {
    key: String,
    prev: Option<OsString>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.prev {
            Some(val) => std::env::set_var(&self.key, val),
            None => std::env::remove_var(&self.key),
        }
    }
}

/// Sets `key` to `val` until the guard is dropped.
pub fn set_env(key: &str, val: &str) -> EnvGuard {
    let guard = EnvGuard {
        key: key.to_string(),
        prev: std::env::var_os(key),
    };
    std::env::set_var(key, val);
    guard
}

/// Unsets `key` until the guard is dropped.
pub fn unset_env(key: &str) -> EnvGuard {
    let guard = EnvGuard {
        key: key.to_string(),
        prev: std::env::var_os(key),
    };
    std::env::remove_var(key);
    guard
}

pub fn init_logger() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}
