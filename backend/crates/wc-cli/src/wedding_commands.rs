use clap::Subcommand;

#[derive(Subcommand)]
pub enum WeddingCommands {
    /// Get your own wedding (requires login)
    Get,

    /// Get a public wedding page by wedding ID or shareable ID
    Public {
        /// Wedding UUID or 8-character shareable ID
        id: String,
    },

    /// Change the page theme (requires login)
    Theme {
        #[arg(value_parser = ["classic", "modern", "boho"])]
        name: String,
    },

    /// Build the share link QR code for your wedding (requires login)
    Qr {
        /// Style: square, rounded, dots, rounded-dots, extra-rounded, classy
        #[arg(long, default_value = "square")]
        style: String,

        /// Foreground color as #RRGGBB
        #[arg(long, default_value = "#000000")]
        color: String,

        /// Background color as #RRGGBB
        #[arg(long, default_value = "#ffffff")]
        background: String,

        /// Public site origin for the share link (default: public.origin from config)
        #[arg(long)]
        origin: Option<String>,

        /// Download the PNG to this file or directory
        #[arg(long)]
        out: Option<String>,
    },
}
