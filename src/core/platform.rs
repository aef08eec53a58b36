//! Runtime platform detection

pub const PLATFORM_IOS: &str = "ios";
pub const PLATFORM_ANDROID: &str = "android";
pub const PLATFORM_WEB: &str = "web";

/// Answers the two questions the logger asks about its environment.
pub trait Platform: Send + Sync {
    /// Whether logs should go to the native bridge rather than a console.
    fn is_native_runtime(&self) -> bool;

    /// Lowercase platform name such as `"ios"`, `"android"` or `"web"`.
    fn platform_name(&self) -> &str;

    /// Whether the platform has the syslog toggle.
    fn supports_syslog(&self) -> bool {
        self.platform_name() == PLATFORM_IOS
    }
}

/// Detects the platform from the compilation target.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl Platform for HostPlatform {
    fn is_native_runtime(&self) -> bool {
        cfg!(any(target_os = "ios", target_os = "android"))
    }

    fn platform_name(&self) -> &str {
        if cfg!(target_arch = "wasm32") {
            PLATFORM_WEB
        } else {
            std::env::consts::OS
        }
    }
}

/// A fixed answer, for embedding hosts that know where they run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPlatform {
    native: bool,
    name: String,
}

impl StaticPlatform {
    pub fn new(native: bool, name: impl Into<String>) -> Self {
        Self {
            native,
            name: name.into(),
        }
    }

    pub fn ios() -> Self {
        Self::new(true, PLATFORM_IOS)
    }

    pub fn android() -> Self {
        Self::new(true, PLATFORM_ANDROID)
    }

    pub fn web() -> Self {
        Self::new(false, PLATFORM_WEB)
    }
}

impl Platform for StaticPlatform {
    fn is_native_runtime(&self) -> bool {
        self.native
    }

    fn platform_name(&self) -> &str {
        &self.name
    }
}
