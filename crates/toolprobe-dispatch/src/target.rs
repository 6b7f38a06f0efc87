/// Which remote chat-completion surface a dispatch goes to
///
/// `GatewayNative` and `GatewayCompat` share one credential/account pair and
/// differ only in the API primitive (and therefore the tool wire shape);
/// `DirectProvider` is a separate credential against the provider's own API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendTarget {
    /// Gateway's native "run inference" primitive (flat tool shape)
    GatewayNative,
    /// Gateway's OpenAI-compatible chat-completions surface (wrapped shape)
    GatewayCompat,
    /// Third-party provider called directly (wrapped shape)
    DirectProvider,
}

impl BackendTarget {
    /// Stable name used in logs
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GatewayNative => "gateway-native",
            Self::GatewayCompat => "gateway-compat",
            Self::DirectProvider => "direct-provider",
        }
    }
}

impl std::fmt::Display for BackendTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
