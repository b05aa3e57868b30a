//! Auth Config

use clap::Args;

/// Supabase session settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Supabase project URL
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: String,

    /// Supabase anon (public) API key
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_anon_key: String,

    /// Cookie carrying the Supabase access token
    #[arg(long, env = "SESSION_COOKIE_NAME", default_value = "sb-access-token")]
    pub session_cookie_name: String,
}
