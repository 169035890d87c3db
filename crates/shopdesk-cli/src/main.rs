//! shopdesk CLI
//!
//! Drives the shopdesk admin flows from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Sign in and list the first page of products
//! shopdesk --username alice --password secret1 products list
//!
//! # Add a product; values go through the same form rules as the UI
//! shopdesk -u alice -p secret1 products add --name "iPhone 99" --price 9999 \
//!     --quantity 10 --category SMARTPHONE
//!
//! # Delete without the confirmation prompt
//! shopdesk -u alice -p secret1 --yes products delete 3
//!
//! # Walk through the flows against in-memory data
//! shopdesk demo
//! ```
//!
//! The session cookie lives only as long as the process, so commands that
//! need an authenticated backend sign in first with `--username` and
//! `--password`.

mod console;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use shopdesk_admin::{DeleteOutcome, ListParams, ProductPage, SubmitOutcome};
use shopdesk_api::{
    ApiClient, AuthRepository, ClientConfig, InMemoryAuthRepository, InMemoryProductRepository,
    ProductInput, ProductRepository, SortDirection, SortField, UserSession, DEFAULT_BASE_URL,
};
use shopdesk_auth::{AuthGuard, LoginPage, Outcome, RegisterPage, Session};
use shopdesk_router::{History, Navigator, Notifier, Router};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::console::ConsoleNotifier;

#[derive(Parser)]
#[command(name = "shopdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "SHOPDESK_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "SHOPDESK_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Account name used to sign in before the command runs
    #[arg(short, long, env = "SHOPDESK_USERNAME")]
    username: Option<String>,

    /// Account password
    #[arg(short, long, env = "SHOPDESK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Answer yes to every confirmation
    #[arg(long)]
    yes: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and show the current user
    Login,

    /// Create an account
    Register {
        /// Password confirmation (defaults to the password)
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Show the signed-in user
    Whoami,

    /// Sign in, then end the session
    Logout,

    /// Manage products
    #[command(subcommand)]
    Products(ProductCommands),

    /// Run the admin flows against in-memory data
    Demo,
}

#[derive(Subcommand)]
enum ProductCommands {
    /// List one page of products
    List {
        /// Page number, starting at 0
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Products per page
        #[arg(long, default_value_t = shopdesk_admin::DEFAULT_PAGE_SIZE)]
        size: u32,

        /// Sort column (id, productName, price, quantity)
        #[arg(long, default_value = "id")]
        sort: SortField,

        /// Sort direction (asc, desc)
        #[arg(long, default_value = "asc")]
        dir: SortDirection,
    },

    /// Show one product
    Show {
        /// Product id
        id: i64,
    },

    /// Add a product
    Add(ProductFields),

    /// Change a product; omitted fields keep their value
    Update {
        /// Product id
        id: i64,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: i64,
    },
}

/// Raw field values; they are validated by the product form.
#[derive(Args)]
struct ProductFields {
    /// Product name
    #[arg(long)]
    name: Option<String>,

    /// Unit price
    #[arg(long)]
    price: Option<String>,

    /// Quantity in stock
    #[arg(long)]
    quantity: Option<String>,

    /// Free-text description
    #[arg(long)]
    description: Option<String>,

    /// Category (SMARTPHONE, LAPTOPS, HEADPHONES, CAMERAS)
    #[arg(long)]
    category: Option<String>,
}

impl ProductFields {
    fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("productName", self.name.as_deref()),
            ("price", self.price.as_deref()),
            ("quantity", self.quantity.as_deref()),
            ("description", self.description.as_deref()),
            ("category", self.category.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let notifier = Arc::new(ConsoleNotifier::new(cli.yes));
    let history = Arc::new(History::new());

    match &cli.command {
        Commands::Login => {
            let client = connect(&cli)?;
            let user = sign_in(&cli, client.auth(), history, notifier).await?;
            println!("Signed in as {} (id {})", user.username, user.id);
        }
        Commands::Register { confirm } => {
            let client = connect(&cli)?;
            let (username, password) = credentials(&cli)?;
            let mut page = RegisterPage::new(client.auth(), history, notifier);
            page.on_change("name", username)?;
            page.on_change("password", password)?;
            page.on_change("confirmPassword", confirm.as_deref().unwrap_or(password))?;
            match page.submit().await {
                Outcome::Completed(account) => println!("Registered {}", account.username),
                Outcome::Invalid => bail!(form_errors(page.form().errors())),
                Outcome::Failed(err) => return Err(err.into()),
            }
        }
        Commands::Whoami => {
            let client = connect(&cli)?;
            sign_in_if_configured(&cli, client.auth(), history.clone(), notifier).await?;
            let mut session = Session::new(client.auth(), history);
            match session.refresh().await {
                Some(user) => println!("{} (id {})", user.username, user.id),
                None => bail!("not signed in"),
            }
        }
        Commands::Logout => {
            let client = connect(&cli)?;
            sign_in(&cli, client.auth(), history.clone(), notifier).await?;
            let mut session = Session::new(client.auth(), history);
            session.refresh().await;
            session.logout().await?;
            println!("Signed out");
        }
        Commands::Products(command) => {
            let client = connect(&cli)?;
            sign_in_if_configured(&cli, client.auth(), history, notifier.clone()).await?;
            run_products(client.products(), notifier, command).await?;
        }
        Commands::Demo => run_demo(notifier).await?,
    }

    Ok(())
}

fn connect(cli: &Cli) -> anyhow::Result<ApiClient> {
    let config = ClientConfig::new(cli.api_url.as_str()).timeout(Duration::from_secs(cli.timeout));
    ApiClient::new(config).context("failed to configure the backend client")
}

fn credentials(cli: &Cli) -> anyhow::Result<(&str, &str)> {
    match (cli.username.as_deref(), cli.password.as_deref()) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => bail!("--username and --password (or SHOPDESK_USERNAME and SHOPDESK_PASSWORD) are required"),
    }
}

async fn sign_in<A, N, M>(
    cli: &Cli,
    auth: A,
    navigator: N,
    notifier: M,
) -> anyhow::Result<UserSession>
where
    A: AuthRepository,
    N: Navigator,
    M: Notifier,
{
    let (username, password) = credentials(cli)?;
    login(auth, navigator, notifier, username, password).await
}

async fn sign_in_if_configured<A, N, M>(
    cli: &Cli,
    auth: A,
    navigator: N,
    notifier: M,
) -> anyhow::Result<()>
where
    A: AuthRepository,
    N: Navigator,
    M: Notifier,
{
    if cli.username.is_some() || cli.password.is_some() {
        sign_in(cli, auth, navigator, notifier).await?;
    }
    Ok(())
}

async fn login<A, N, M>(
    auth: A,
    navigator: N,
    notifier: M,
    username: &str,
    password: &str,
) -> anyhow::Result<UserSession>
where
    A: AuthRepository,
    N: Navigator,
    M: Notifier,
{
    let mut page = LoginPage::new(auth, navigator, notifier);
    page.on_change("name", username)?;
    page.on_change("password", password)?;
    match page.submit().await {
        Outcome::Completed(user) => {
            info!("Signed in as {}", user.username);
            Ok(user)
        }
        Outcome::Invalid => bail!(form_errors(page.form().errors())),
        Outcome::Failed(err) => Err(err.into()),
    }
}

async fn run_products<R, M>(repo: R, notifier: M, command: &ProductCommands) -> anyhow::Result<()>
where
    R: ProductRepository + Clone,
    M: Notifier,
{
    let mut page = ProductPage::new(repo.clone(), notifier);
    match command {
        ProductCommands::List {
            page: number,
            size,
            sort,
            dir,
        } => {
            page.load_page(ListParams {
                page: *number,
                page_size: *size,
                sort_by: *sort,
                sort_dir: *dir,
            })
            .await?;
            print_page(&page);
        }
        ProductCommands::Show { id } => {
            page.reload().await?;
            let product = match page.product(*id) {
                Some(product) => product.clone(),
                None => repo.get(*id).await?,
            };
            print_detail(&product);
        }
        ProductCommands::Add(fields) => {
            page.reload().await?;
            page.open_add_form();
            save(&mut page, fields).await?;
        }
        ProductCommands::Update { id, fields } => {
            page.reload().await?;
            let product = repo.get(*id).await?;
            page.select_for_edit(&product);
            save(&mut page, fields).await?;
        }
        ProductCommands::Delete { id } => {
            page.reload().await?;
            match page.delete_product(*id).await {
                DeleteOutcome::Deleted => println!("Deleted product {id}"),
                DeleteOutcome::Cancelled => println!("Cancelled"),
                DeleteOutcome::Failed(err) => return Err(err.into()),
            }
        }
    }
    Ok(())
}

/// Feeds `fields` into the open editor and submits it.
async fn save<R, M>(page: &mut ProductPage<R, M>, fields: &ProductFields) -> anyhow::Result<()>
where
    R: ProductRepository,
    M: Notifier,
{
    for (key, value) in fields.entries() {
        page.on_change(key, value)?;
    }

    match page.submit_editor().await? {
        SubmitOutcome::Saved(product) => {
            print_detail(&product);
            Ok(())
        }
        SubmitOutcome::Invalid => {
            let message = page
                .editor()
                .map(|editor| form_errors(editor.form().errors()))
                .unwrap_or_default();
            bail!(message)
        }
        SubmitOutcome::Rejected(errors) => bail!(form_errors(errors.iter().collect())),
        SubmitOutcome::Failed(err) => Err(err.into()),
    }
}

fn form_errors(errors: Vec<(&str, &str)>) -> String {
    errors
        .into_iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_page<R: ProductRepository, M: Notifier>(page: &ProductPage<R, M>) {
    let params = page.params();
    if page.products().is_empty() {
        println!("No products.");
        return;
    }

    println!(
        "{:>6}  {:<32} {:>14} {:>8}  {}",
        "ID", "NAME", "PRICE", "QTY", "CATEGORY"
    );
    for product in page.products() {
        println!(
            "{:>6}  {:<32} {:>14} {:>8}  {}",
            product.id,
            product.product_name,
            shopdesk_admin::templates::format_price(product.price),
            product.quantity,
            product.category
        );
    }
    println!("Page {} / {}", params.page.saturating_add(1), page.total_pages());
}

fn print_detail(product: &shopdesk_api::Product) {
    println!("ID:          {}", product.id);
    println!("Name:        {}", product.product_name);
    println!(
        "Price:       {}",
        shopdesk_admin::templates::format_price(product.price)
    );
    println!("Quantity:    {}", product.quantity);
    println!(
        "Description: {}",
        product.description.as_deref().unwrap_or("-")
    );
    println!("Category:    {}", product.category);
}

async fn run_demo(notifier: Arc<ConsoleNotifier>) -> anyhow::Result<()> {
    let auth = Arc::new(InMemoryAuthRepository::new());
    let products = Arc::new(InMemoryProductRepository::with_products([
        ProductInput {
            product_name: "Pixel 9".to_string(),
            price: 799.0,
            quantity: 25,
            description: "Google phone".to_string(),
            category: shopdesk_api::Category::Smartphone,
        },
        ProductInput {
            product_name: "ThinkPad X1".to_string(),
            price: 1899.0,
            quantity: 7,
            description: String::new(),
            category: shopdesk_api::Category::Laptops,
        },
    ]));
    let history = Arc::new(History::new());
    let router = Router::new(history.clone()).guard(AuthGuard::new(auth.clone()));

    info!("Registering demo account");
    let mut register = RegisterPage::new(auth.clone(), history.clone(), notifier.clone());
    register.on_change("name", "demo")?;
    register.on_change("password", "demo123")?;
    register.on_change("confirmPassword", "demo123")?;
    if register.submit().await.completed().is_none() {
        bail!("demo registration failed");
    }

    let shown = router.navigate("/admin").await?;
    println!("Visiting /admin while signed out shows {shown}");

    login(auth.clone(), history.clone(), notifier.clone(), "demo", "demo123").await?;
    let shown = router.navigate("/admin").await?;
    println!("Visiting /admin after signing in shows {shown}");

    let mut page = ProductPage::new(products.clone(), notifier.clone());
    page.reload().await?;
    print_page(&page);

    info!("Adding a product");
    page.open_add_form();
    save(
        &mut page,
        &ProductFields {
            name: Some("iPhone 99".to_string()),
            price: Some("9999".to_string()),
            quantity: Some("10".to_string()),
            description: Some("Next year's phone".to_string()),
            category: Some("SMARTPHONE".to_string()),
        },
    )
    .await?;

    page.set_sort(SortField::Price, SortDirection::Desc).await?;
    print_page(&page);

    let Some(newest) = page.products().first().map(|p| p.id) else {
        bail!("demo product list is empty");
    };
    info!("Deleting product {newest}");
    if !matches!(page.delete_product(newest).await, DeleteOutcome::Deleted) {
        bail!("demo delete did not complete");
    }
    print_page(&page);

    let mut session = Session::new(auth, history.clone());
    session.refresh().await;
    session.logout().await?;
    println!("Signed out, now at {}", history.current().map_or_else(String::new, |r| r.to_string()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, price: &str) -> ProductFields {
        ProductFields {
            name: Some(name.to_string()),
            price: Some(price.to_string()),
            quantity: None,
            description: None,
            category: None,
        }
    }

    #[tokio::test]
    async fn test_demo_runs_to_completion() {
        run_demo(Arc::new(ConsoleNotifier::new(true))).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_reports_form_errors() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let mut page = ProductPage::new(repo.clone(), ConsoleNotifier::new(true));
        page.open_add_form();

        let err = save(&mut page, &fields("Sony A7", "abc")).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("price: "));
        assert!(message.contains("quantity: This field is required"));
        assert!(message.contains("category: This field is required"));
        assert!(!message.contains("productName"));
        assert!(repo.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_then_update_keeps_omitted_fields() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let mut page = ProductPage::new(repo.clone(), ConsoleNotifier::new(true));
        page.open_add_form();
        let mut add = fields("Sony A7", "1999");
        add.quantity = Some("4".to_string());
        add.category = Some("CAMERAS".to_string());
        save(&mut page, &add).await.unwrap();

        let product = repo.get(1).await.unwrap();
        page.select_for_edit(&product);
        let update = ProductFields {
            name: None,
            price: Some("1799".to_string()),
            quantity: None,
            description: None,
            category: None,
        };
        save(&mut page, &update).await.unwrap();

        let stored = repo.get(1).await.unwrap();
        assert_eq!(stored.product_name, "Sony A7");
        assert_eq!(stored.price, 1799.0);
        assert_eq!(stored.quantity, 4);
    }

    #[test]
    fn test_cli_parses_product_add() {
        let cli = Cli::try_parse_from([
            "shopdesk",
            "--yes",
            "products",
            "add",
            "--name",
            "iPhone 99",
            "--price",
            "9999",
        ])
        .unwrap();
        assert!(cli.yes);
        let Commands::Products(ProductCommands::Add(fields)) = cli.command else {
            panic!("expected products add");
        };
        assert_eq!(
            fields.entries(),
            vec![("productName", "iPhone 99"), ("price", "9999")]
        );
    }
}
