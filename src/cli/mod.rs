use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL gateway
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value = "8787")]
        port: u16,
    },

    /// Send one prompt through the completion service and print the answer
    Ask {
        prompt: String,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}
