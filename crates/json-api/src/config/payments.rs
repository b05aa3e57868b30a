//! Payments Config

use clap::Args;

/// Stripe webhook settings.
#[derive(Debug, Args)]
pub struct PaymentsConfig {
    /// Stripe webhook signing secret (`whsec_...`)
    #[arg(long, env = "STRIPE_WEBHOOK_SECRET", hide_env_values = true)]
    pub stripe_webhook_secret: Option<String>,

    /// Maximum age of a signed webhook timestamp, in seconds
    #[arg(long, env = "STRIPE_WEBHOOK_TOLERANCE_SECONDS", default_value_t = 300_u64)]
    pub stripe_webhook_tolerance_seconds: u64,
}
