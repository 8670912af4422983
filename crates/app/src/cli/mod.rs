use clap::{Parser, Subcommand};

mod db;
mod item;

#[derive(Debug, Parser)]
#[command(name = "shopcart-app", about = "Shopcart admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Item(item::ItemCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Item(command) => item::run(command).await,
        }
    }
}
