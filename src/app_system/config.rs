use std::num::NonZeroUsize;

use clap::Parser;

/// Runtime settings for the directory process.
#[derive(Debug, Clone, Parser)]
#[command(name = "user_directory", about = "In-memory user directory served as JSON lines")]
pub struct DirectoryConfig {
    /// Capacity of the user actor's request channel
    #[arg(long, env = "USER_DIRECTORY_BUFFER_SIZE", default_value = "32")]
    pub buffer_size: NonZeroUsize,

    /// Longest accepted request line in bytes
    #[arg(long, env = "USER_DIRECTORY_MAX_LINE_LENGTH", default_value = "65536")]
    pub max_line_length: NonZeroUsize,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, env = "USER_DIRECTORY_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            buffer_size: NonZeroUsize::new(32).unwrap_or(NonZeroUsize::MIN),
            max_line_length: NonZeroUsize::new(65536).unwrap_or(NonZeroUsize::MIN),
            log_filter: "info".to_string(),
        }
    }
}
