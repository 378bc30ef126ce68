use std::fmt;

/// Shell dialect targeted by the generated diff-report script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptFlavor {
    /// POSIX shell (bash/zsh) for Linux and macOS.
    Sh,
    /// PowerShell for Windows.
    Ps,
}

impl ScriptFlavor {
    /// All flavors in selector order.
    pub const ALL: [ScriptFlavor; 2] = [ScriptFlavor::Sh, ScriptFlavor::Ps];

    /// Identifier accepted by `--script`.
    pub fn key(&self) -> &'static str {
        match self {
            ScriptFlavor::Sh => "sh",
            ScriptFlavor::Ps => "ps",
        }
    }

    /// Human-readable description shown by the selector.
    pub fn description(&self) -> &'static str {
        match self {
            ScriptFlavor::Sh => "POSIX Shell (Bash/Zsh) - Linux/Mac",
            ScriptFlavor::Ps => "PowerShell - Windows",
        }
    }

    /// File name of the generated script.
    pub fn file_name(&self) -> &'static str {
        match self {
            ScriptFlavor::Sh => "git-relatorio.sh",
            ScriptFlavor::Ps => "git-relatorio.ps1",
        }
    }

    /// Whether the generated script gets the execute bits.
    pub fn is_executable(&self) -> bool {
        matches!(self, ScriptFlavor::Sh)
    }

    /// Prefix used to invoke the script relative to the project root.
    pub fn run_prefix(&self) -> &'static str {
        match self {
            ScriptFlavor::Sh => "./",
            ScriptFlavor::Ps => ".\\",
        }
    }

    /// Parse a flavor from its identifier.
    pub fn from_key(key: &str) -> Option<ScriptFlavor> {
        Self::ALL.into_iter().find(|flavor| flavor.key() == key)
    }

    /// Comma-separated list of accepted identifiers.
    pub fn available() -> String {
        Self::ALL.iter().map(|flavor| flavor.key()).collect::<Vec<_>>().join(", ")
    }

    /// Default flavor for the host operating system.
    pub fn host_default() -> ScriptFlavor {
        if cfg!(windows) { ScriptFlavor::Ps } else { ScriptFlavor::Sh }
    }
}

impl fmt::Display for ScriptFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key().to_uppercase())
    }
}
