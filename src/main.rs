use collaborators::{commands, Config, GithubAccess, Report, Result};
use console::style;
use github::client::Permission;
use log::debug;
use std::{path::PathBuf, process};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "github-collaborators",
    about = "Manage collaborators on your GitHub repositories"
)]
struct Options {
    #[structopt(short, long, parse(from_os_str))]
    /// settings file to use [default: ~/.github-collaborators]
    config: Option<PathBuf>,

    #[structopt(short, long)]
    /// log requests and responses
    verbose: bool,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    #[structopt(name = "ls")]
    /// Lists repo collaborators
    List { repo: String },

    #[structopt(name = "add")]
    /// Adds a collaborator to the repo
    Add {
        collaborator: String,
        repo: String,

        #[structopt(long)]
        /// permission to grant: pull, triage, push, maintain or admin
        permission: Option<Permission>,
    },

    #[structopt(name = "remove")]
    /// Removes a collaborator from the repo
    Remove { collaborator: String, repo: String },

    #[structopt(name = "cancel")]
    /// Cancels an invitation
    Cancel { collaborator: String, repo: String },
}

#[tokio::main]
async fn main() {
    let opts = Options::from_args();

    // warn by default, everything we log with --verbose
    let default_filter = if opts.verbose { "debug" } else { "warn" };
    env_logger::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match run(opts).await {
        Ok(report) => {
            if !report.is_empty() {
                println!("\n{}\n", report);
            }
        }
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("{}", style(&e).red().for_stderr());
            process::exit(e.exit_code());
        }
    }
}

async fn run(opts: Options) -> Result<Report> {
    let config = Config::load(opts.config.as_deref())?;
    debug!("loaded {:?}", config);

    let api = GithubAccess::from_config(&config)?;

    match opts.command {
        Command::List { repo } => commands::list(&api, &repo).await,
        Command::Add {
            collaborator,
            repo,
            permission,
        } => commands::add(&api, &collaborator, &repo, permission).await,
        Command::Remove { collaborator, repo } => {
            commands::remove(&api, &collaborator, &repo).await
        }
        Command::Cancel { collaborator, repo } => {
            commands::cancel(&api, &collaborator, &repo).await
        }
    }
}
