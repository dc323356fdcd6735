//! Scoped environment overrides for configuration tests.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Restores overridden environment variables when dropped.
///
/// The process environment is global state, so the guard also holds a lock
/// that serializes every test touching it.
pub struct EnvGuard {
    saved: Vec<(&'static str, Option<OsString>)>,
    _serialized: MutexGuard<'static, ()>,
}

impl EnvGuard {
    /// Applies the given variable overrides for the guard lifetime.
    ///
    /// A `None` value unsets the variable; prior values are restored on
    /// drop in either case.
    pub fn override_vars(vars: &[(&'static str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let mut saved = Vec::with_capacity(vars.len());
        for (name, replacement) in vars {
            saved.push((*name, env::var_os(name)));
            unsafe {
                // SAFETY: ENV_LOCK serializes environment mutation across tests.
                match replacement {
                    Some(value) => env::set_var(name, value),
                    None => env::remove_var(name),
                }
            }
        }

        Self {
            saved,
            _serialized: lock,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, original) in self.saved.drain(..) {
            unsafe {
                // SAFETY: ENV_LOCK serializes environment mutation across tests.
                match original {
                    Some(value) => env::set_var(name, value),
                    None => env::remove_var(name),
                }
            }
        }
    }
}
