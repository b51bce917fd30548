use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use beaukit_server::user::{SqliteUserStore, UserManager, DEFAULT_AUTH_TOKEN_TTL};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// The user database, created if missing.
    #[clap(value_parser = parse_path)]
    pub path: PathBuf,
}

#[derive(Parser)]
#[command(name = "")]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Creates a user that can sign in with the given password.
    AddUser {
        email: String,
        name: String,
        password: String,
    },

    /// Replaces the password of a user.
    UpdatePassword { email: String, password: String },

    /// Deletes a user together with sessions and profiles.
    DeleteUser { email: String },

    /// Shows a user and how many profiles it saved.
    Show { email: String },

    /// Shows all users.
    ListUsers,

    /// Deletes expired auth tokens.
    PruneTokens,

    /// Shows the path of the current db.
    Where,

    /// Close this program.
    Exit,
}

enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

const PROMPT: &str = ">> ";

fn execute_command(
    line: &str,
    user_manager: &UserManager,
    db_path: &PathBuf,
) -> CommandExecutionResult {
    if line.is_empty() {
        return CommandExecutionResult::Ok;
    }

    let args =
        shlex::split(line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    let result = match cli {
        Ok(cli) => match cli.command {
            InnerCommand::AddUser {
                email,
                name,
                password,
            } => user_manager
                .add_user(&name, &email, &password)
                .map(|user| println!("Created user {}", user.id)),
            InnerCommand::UpdatePassword { email, password } => {
                user_manager.update_password(&email, &password)
            }
            InnerCommand::DeleteUser { email } => user_manager.delete_user(&email),
            InnerCommand::Show { email } => user_manager.get_user_by_email(&email).and_then(|user| {
                let account = user_manager.get_account(&user.id)?;
                println!("{:#?}", user);
                println!("Profiles: {}", account.profile_count);
                Ok(())
            }),
            InnerCommand::ListUsers => user_manager.get_all_users().map(|users| {
                for user in users.iter() {
                    println!("{}  {}  <{}>", user.id, user.name, user.email);
                }
            }),
            InnerCommand::PruneTokens => user_manager
                .purge_expired_auth_tokens()
                .map(|count| println!("Deleted {} tokens", count)),
            InnerCommand::Where => {
                println!("{}", db_path.display());
                Ok(())
            }
            InnerCommand::Exit => return CommandExecutionResult::Exit,
        },
        Err(e) => return CommandExecutionResult::Error(e.to_string()),
    };

    match result {
        Ok(()) => CommandExecutionResult::Ok,
        Err(err) => CommandExecutionResult::Error(format!("{}", err)),
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    let user_store = SqliteUserStore::new(&cli_args.path)
        .with_context(|| format!("Could not open user db at {:?}", cli_args.path))?;
    let user_manager = UserManager::new(Box::new(user_store), DEFAULT_AUTH_TOKEN_TTL);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        if reader.read_line(&mut line).context("Failed to read line")? == 0 {
            break;
        }

        match execute_command(line.trim(), &user_manager, &cli_args.path) {
            CommandExecutionResult::Ok => {}
            CommandExecutionResult::Exit => break,
            CommandExecutionResult::Error(msg) => eprintln!("{}", msg),
        }
    }
    Ok(())
}
