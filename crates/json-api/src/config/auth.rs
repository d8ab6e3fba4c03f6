//! Auth Config

use clap::Args;

/// Shared secret for mutating routes.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Value expected in the `Token` request header
    #[arg(long, env = "Token", hide_env_values = true)]
    pub token: String,
}
