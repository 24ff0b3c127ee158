use clap::Subcommand;

#[derive(Subcommand)]
pub enum GuestbookCommands {
    /// Leave a guestbook message
    Sign {
        /// Wedding UUID, or `public` for the landing page guestbook
        wedding_id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        relationship: Option<String>,

        #[arg(long)]
        message: String,

        /// Visible to the couple only (requires login)
        #[arg(long)]
        private: bool,
    },

    /// List public messages for a wedding
    List { wedding_id: String },
}
