use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account and log in
    Register { username: String, password: String },

    /// Log in and remember the session locally
    Login { username: String, password: String },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Dump every local demo credential, unredacted (debug only)
    Users,
}
