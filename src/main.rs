use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use std::sync::Arc;

use larder::api::LarderClient;
use larder::config::{Config, GlobalArgs};
use larder::models::StoredItem;
use larder::store::FileStore;

/// Command-line client for the Larder kitchen inventory API
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and persist the session
    Login {
        /// Account email; prompted for when omitted
        #[arg(long)]
        email: Option<String>,

        /// Account password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account and log in
    Register {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Account email
        #[arg(long)]
        email: Option<String>,
    },

    /// Drop the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// List catalog items
    Items {
        /// Filter by search word
        #[arg(long)]
        search: Option<String>,

        /// Filter by item category id
        #[arg(long)]
        type_id: Option<i64>,
    },

    /// List item categories
    Types,

    /// List recipes
    Recipes {
        /// Filter by category code, e.g. brk
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one recipe with its ingredients
    Recipe { id: i64 },

    /// Inspect and edit the pantry of the logged-in user
    #[command(subcommand)]
    Pantry(PantryCommand),
}

#[derive(Subcommand)]
enum PantryCommand {
    /// List stored items
    List {
        /// Filter by item category id
        #[arg(long)]
        type_id: Option<i64>,

        /// Filter by search word
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a quantity of an item
    Add {
        #[arg(long)]
        item_id: i64,

        #[arg(long)]
        quantity: i32,
    },

    /// Remove a quantity of an item
    Remove {
        #[arg(long)]
        item_id: i64,

        #[arg(long)]
        quantity: i32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::load(cli.global)?;
    config.validate()?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let store = Arc::new(FileStore::new(config.session_file.clone()));
    let client = LarderClient::new(&config, store)?;

    match cli.command {
        Command::Login { email, password } => {
            let email = match email {
                Some(email) => email,
                None => Input::new().with_prompt("Email").interact_text()?,
            };
            let password = match password {
                Some(password) => password,
                None => Password::new().with_prompt("Password").interact()?,
            };

            let user = client.login(&email, &password).await?;
            println!(
                "Logged in as {} <{}>",
                user.name.as_deref().unwrap_or("?"),
                email
            );
        }

        Command::Register { name, email } => {
            let name = match name {
                Some(name) => name,
                None => Input::new().with_prompt("Name").interact_text()?,
            };
            let email = match email {
                Some(email) => email,
                None => Input::new().with_prompt("Email").interact_text()?,
            };
            let password = Password::new()
                .with_prompt("Password")
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()?;

            let payload = larder::models::User {
                id: None,
                name: Some(name),
                email: email.clone(),
                password: Some(password.clone()),
                role: None,
                token: None,
            };
            client.users().register(&payload).await?;

            let user = client.login(&email, &password).await?;
            println!(
                "Registered and logged in as {} <{}>",
                user.name.as_deref().unwrap_or("?"),
                email
            );
        }

        Command::Logout => {
            client.logout().await?;
            println!("Logged out");
        }

        Command::Whoami => match client.tokens().session().await {
            Some(session) if session.is_active() => {
                let id = session
                    .user_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "?".to_string());
                println!("{} (user id {})", session.email, id);
            }
            _ => println!("Not logged in"),
        },

        Command::Items { search, type_id } => {
            let api = client.items();
            let items = match (type_id, search) {
                (Some(type_id), Some(word)) => api.by_type_and_search(type_id, &word).await?,
                (Some(type_id), None) => api.by_type(type_id).await?,
                (None, Some(word)) => api.search(&word).await?,
                (None, None) => api.list().await?,
            };

            for item in items {
                println!(
                    "{:>4}  {} [{}]",
                    item.id,
                    item.name_en,
                    item.unit.as_deref().unwrap_or("-")
                );
            }
        }

        Command::Types => {
            for item_type in client.item_types().list().await? {
                println!("{:>4}  {}", item_type.id, item_type.name_en);
            }
        }

        Command::Recipes { category } => {
            let recipes = match category {
                Some(category) => client.recipes().by_category(&category).await?,
                None => client.recipes().list().await?,
            };

            for recipe in recipes {
                println!(
                    "{:>4}  {} [{}] {} min, difficulty {}",
                    recipe.id, recipe.name_en, recipe.category, recipe.time, recipe.difficulty
                );
            }
        }

        Command::Recipe { id } => {
            let recipes_client = client.recipes();
            let ingredients_client = client.ingredients();
            let (recipes, ingredients) =
                tokio::try_join!(recipes_client.get(id), ingredients_client.for_recipe(id))?;

            let Some(recipe) = recipes.into_iter().next() else {
                anyhow::bail!("recipe {id} not found");
            };

            println!("{} [{}]", recipe.name_en, recipe.category);
            println!("{}", recipe.description_en);
            println!(
                "Difficulty {} | {} minutes",
                recipe.difficulty, recipe.time
            );
            println!("Ingredients:");
            for ingredient in ingredients {
                match ingredient.item {
                    Some(item) => println!(
                        "  {} x{} {}",
                        item.name_en,
                        ingredient.quantity,
                        item.unit.as_deref().unwrap_or("")
                    ),
                    None => println!("  item #{} x{}", ingredient.item_id, ingredient.quantity),
                }
            }
        }

        Command::Pantry(pantry) => {
            let user_id = client.current_user_id().await?;
            let api = client.storage();

            match pantry {
                PantryCommand::List { type_id, search } => {
                    let stored = match (type_id, search) {
                        (Some(type_id), Some(word)) => {
                            api.by_type_and_search(user_id, type_id, &word).await?
                        }
                        (Some(type_id), None) => api.by_type(user_id, type_id).await?,
                        (None, Some(word)) => api.search(user_id, &word).await?,
                        (None, None) => api.list(user_id).await?,
                    };

                    if stored.is_empty() {
                        println!("Pantry is empty");
                    }
                    for entry in stored {
                        match entry.stored_item {
                            Some(item) => {
                                println!("{:>4}  {} x{}", entry.item_id, item.name_en, entry.quantity)
                            }
                            None => println!("{:>4}  x{}", entry.item_id, entry.quantity),
                        }
                    }
                }

                PantryCommand::Add { item_id, quantity } => {
                    api.add(&StoredItem {
                        id: None,
                        user_id,
                        item_id,
                        quantity,
                        stored_item: None,
                    })
                    .await?;
                    println!("Added {quantity} of item {item_id}");
                }

                PantryCommand::Remove { item_id, quantity } => {
                    api.remove(&StoredItem {
                        id: None,
                        user_id,
                        item_id,
                        quantity,
                        stored_item: None,
                    })
                    .await?;
                    println!("Removed {quantity} of item {item_id}");
                }
            }
        }
    }

    Ok(())
}
