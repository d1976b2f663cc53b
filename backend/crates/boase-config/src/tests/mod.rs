mod supabase;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point BOASE_CONFIG_DIR at it and clear
/// the overrides a developer shell might carry.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set(crate::CONFIG_DIR_ENV, temp.path().to_str().unwrap()),
        EnvGuard::remove("BOASE_SUPABASE_URL"),
        EnvGuard::remove("BOASE_SUPABASE_ANON_KEY"),
        EnvGuard::remove("BOASE_SUPABASE_REQUEST_TIMEOUT_SECS"),
        EnvGuard::remove("BOASE_SUPABASE_EVENT_BUFFER_SIZE"),
        EnvGuard::remove("BOASE_LOG_LEVEL"),
        EnvGuard::remove("BOASE_LOG_COLORED"),
        EnvGuard::remove("BOASE_LOG_FILE"),
    ];
    (temp, guards)
}
