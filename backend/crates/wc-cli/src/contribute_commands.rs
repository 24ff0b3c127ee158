use clap::Subcommand;

#[derive(Subcommand)]
pub enum ContributeCommands {
    /// Record a completed manual UPI transfer
    Upi {
        /// Wedding UUID or shareable ID
        wedding_id: String,

        #[arg(long)]
        name: String,

        /// Amount in major units (e.g. 1500 for ₹1500)
        #[arg(long)]
        amount: f64,

        /// Three-letter currency code (default: server setting)
        #[arg(long)]
        currency: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        message: Option<String>,

        /// Transfer reference; generated as UPI-{millis}-{suffix} when omitted
        #[arg(long)]
        reference: Option<String>,
    },

    /// Show the completed contribution total for a wedding
    Total { wedding_id: String },
}
