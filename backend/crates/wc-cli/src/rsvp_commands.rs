use clap::Subcommand;

#[derive(Subcommand)]
pub enum RsvpCommands {
    /// Submit an RSVP as a guest
    Submit {
        /// Wedding UUID or shareable ID
        wedding_id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        /// Attending: yes or no
        #[arg(long, value_parser = ["yes", "no"])]
        attendance: String,

        /// Party size including the guest
        #[arg(long, default_value_t = 1)]
        guest_count: u32,

        #[arg(long)]
        dietary: Option<String>,

        #[arg(long)]
        message: Option<String>,
    },

    /// List RSVPs for a wedding
    List {
        /// Wedding UUID or shareable ID
        wedding_id: String,
    },
}
