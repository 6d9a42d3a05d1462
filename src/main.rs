use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::Arc,
};

use clap::{Parser, Subcommand};
use eltuzer_storefront::{
    app::{self, AppState},
    config::AppConfig,
    models::ImageFile,
    queries::auth_queries,
    routes::Route,
    viewmodels::{
        start_autoplay, AdminViewModel, CatalogStatus, CatalogViewModel, CategoryForm,
        DetailState, Interaction, LeadForm, LoginViewModel, Outcome, ProductDetailViewModel,
        ProductForm, SlideForm,
    },
};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse the catalog, optionally filtered by category
    Catalog {
        #[arg(short, long)]
        category: Option<i32>,
        /// Show the home page instead (adds the carousel)
        #[arg(long)]
        home: bool,
    },
    /// Open a page by its path, e.g. "/products?category=2"
    Open { path: String },
    /// Show a single product
    Product { id: i32 },
    /// Cycle through the carousel slides
    Carousel {
        #[arg(short, long, default_value_t = 1)]
        rounds: usize,
    },
    /// Validate a contact request from the lead form
    Lead {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        phone: String,
        #[arg(short, long, default_value = "")]
        message: String,
    },
    /// Log in to the admin panel
    Login { username: String, password: String },
    /// Forget the stored session token
    Logout,
    /// Show the logged-in user
    Me,
    /// Admin panel commands
    Admin {
        /// Answer yes to confirmation prompts
        #[arg(short, long, global = true)]
        yes: bool,
        #[command(subcommand)]
        subcmd: AdminCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AdminCommand {
    List,
    SaveProduct {
        #[arg(long)]
        id: Option<i32>,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    DeleteProduct { id: i32 },
    SaveCategory {
        #[arg(long)]
        id: Option<i32>,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    DeleteCategory { id: i32 },
    SaveSlide {
        #[arg(long)]
        id: Option<i32>,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        subtitle: String,
        #[arg(long, default_value = "")]
        link: String,
        #[arg(long, default_value = "")]
        order: String,
        #[arg(long)]
        inactive: bool,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    DeleteSlide { id: i32 },
}

/// Prompts on stdin, alerts on stderr.
struct Terminal {
    assume_yes: bool,
}

impl Interaction for Terminal {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes" | "д" | "да")
    }

    fn alert(&mut self, message: &str) {
        eprintln!("! {}", message);
    }

    fn navigate(&mut self, route: Route) {
        tracing::info!("Redirecting to {}", route);
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let state = match app::build(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to build application: {}", e);
            std::process::exit(1);
        }
    };

    if !run(cli.command, &state).await {
        std::process::exit(1);
    }
}

async fn run(command: Commands, state: &AppState) -> bool {
    match command {
        Commands::Catalog { category, home } => {
            let route = if home {
                Route::Home
            } else {
                Route::Products { category }
            };
            show_page(state, route).await
        }
        Commands::Open { path } => show_page(state, Route::parse(&path)).await,
        Commands::Product { id } => show_page(state, Route::ProductDetail(id)).await,
        Commands::Carousel { rounds } => cycle_carousel(state, rounds).await,
        Commands::Lead {
            name,
            phone,
            message,
        } => {
            let mut form = LeadForm::new();
            form.name = name;
            form.set_phone(&phone);
            form.message = message;
            match form.submit() {
                Ok(lead) => {
                    println!("Имя: {}", lead.name);
                    println!("Телефон: {}", lead.phone);
                    if let Some(message) = lead.message {
                        println!("Сообщение: {}", message);
                    }
                    true
                }
                Err(e) => {
                    eprintln!("! {}", e);
                    false
                }
            }
        }
        Commands::Login { username, password } => {
            let mut login = LoginViewModel::new(state.client.clone());
            login.username = username;
            login.password = password;
            let mut terminal = Terminal { assume_yes: false };
            if login.submit(&mut terminal).await {
                println!("Вход выполнен");
                true
            } else {
                eprintln!("! {}", login.error().unwrap_or_default());
                false
            }
        }
        Commands::Logout => {
            let mut admin = AdminViewModel::new(state.client.clone(), Terminal { assume_yes: false });
            admin.logout();
            true
        }
        Commands::Me => match auth_queries::current_user(&state.client).await {
            Ok(user) => {
                println!("{} <{}>", user.username, user.email);
                true
            }
            Err(e) => {
                eprintln!("! {}", e);
                false
            }
        },
        Commands::Admin { yes, subcmd } => run_admin(state, yes, subcmd).await,
    }
}

async fn show_page(state: &AppState, route: Route) -> bool {
    match route {
        Route::Home | Route::Products { .. } => {
            let mut catalog = if route == Route::Home {
                CatalogViewModel::home(state.client.clone())
            } else {
                CatalogViewModel::from_route(state.client.clone(), &route)
            };
            catalog.load().await;

            if route == Route::Home {
                let carousel = catalog.carousel();
                for (i, slide) in carousel.slides().iter().enumerate() {
                    let marker = if i == carousel.index() { "●" } else { "○" };
                    println!("{} {}", marker, slide.title.as_deref().unwrap_or("Слайд"));
                }
            }

            let filters: Vec<String> = catalog
                .categories()
                .iter()
                .map(|c| {
                    if Some(c.id) == catalog.selected_category() {
                        format!("[{}]", c.name)
                    } else {
                        c.name.clone()
                    }
                })
                .collect();
            println!("Категории: {}", filters.join(" | "));

            match catalog.status() {
                CatalogStatus::Empty => println!("Товары не найдены"),
                _ => {
                    for product in catalog.products() {
                        println!(
                            "#{:<4} {:<40} {:>14}  {}",
                            product.id,
                            product.name,
                            product.display_price(),
                            product.category.name
                        );
                    }
                }
            }
            true
        }
        Route::ProductDetail(id) => {
            let mut detail = ProductDetailViewModel::new(state.client.clone(), id);
            detail.load().await;
            match detail.state() {
                DetailState::Found(product) => {
                    println!("{}", product.name);
                    println!("{}", product.display_price());
                    println!("Категория: {}", product.category.name);
                    if let Some(description) = &product.description {
                        println!("{}", description);
                    }
                    if let Some(url) = state.client.image_url(product.image_url.as_deref()) {
                        println!("{}", url);
                    }
                    true
                }
                _ => {
                    println!("Товар не найден");
                    false
                }
            }
        }
        other => {
            println!("Страница {} недоступна в терминале", other);
            false
        }
    }
}

async fn cycle_carousel(state: &AppState, rounds: usize) -> bool {
    let mut home = CatalogViewModel::home(state.client.clone());
    home.load().await;

    let carousel = home.carousel();
    let steps = carousel.len() * rounds;
    if !carousel.autoplays() {
        if let Some(slide) = carousel.current() {
            println!("{}", slide.title.as_deref().unwrap_or("Слайд"));
        }
        return true;
    }

    let carousel = Arc::new(Mutex::new(carousel));
    let _timer = start_autoplay(carousel.clone(), state.autoplay);
    let mut last = usize::MAX;
    let mut shown = 0;
    let mut poll = tokio::time::interval(state.autoplay / 4);

    while shown <= steps {
        poll.tick().await;
        let current = carousel.lock().await;
        if current.index() != last {
            last = current.index();
            shown += 1;
            if let Some(slide) = current.current() {
                println!(
                    "[{}/{}] {}",
                    last + 1,
                    current.len(),
                    slide.title.as_deref().unwrap_or("Слайд")
                );
            }
        }
    }
    true
}

async fn run_admin(state: &AppState, yes: bool, command: AdminCommand) -> bool {
    let mut admin = AdminViewModel::new(state.client.clone(), Terminal { assume_yes: yes });

    let outcome = match command {
        AdminCommand::List => admin.enter().await,
        AdminCommand::SaveProduct {
            id,
            name,
            description,
            price,
            category,
            image,
        } => {
            let image = match image.map(ImageFile::from_path).transpose() {
                Ok(image) => image,
                Err(e) => {
                    eprintln!("! {}", e);
                    return false;
                }
            };
            let form = ProductForm {
                name,
                description,
                price,
                category_id: category,
                image,
            };
            admin.save_product(id, form).await
        }
        AdminCommand::DeleteProduct { id } => admin.delete_product(id).await,
        AdminCommand::SaveCategory {
            id,
            name,
            description,
        } => admin.save_category(id, CategoryForm { name, description }).await,
        AdminCommand::DeleteCategory { id } => admin.delete_category(id).await,
        AdminCommand::SaveSlide {
            id,
            title,
            subtitle,
            link,
            order,
            inactive,
            image,
        } => {
            let image = match image.map(ImageFile::from_path).transpose() {
                Ok(image) => image,
                Err(e) => {
                    eprintln!("! {}", e);
                    return false;
                }
            };
            let form = SlideForm {
                title,
                subtitle,
                link_url: link,
                order,
                is_active: !inactive,
                image,
            };
            admin.save_slide(id, form).await
        }
        AdminCommand::DeleteSlide { id } => admin.delete_slide(id).await,
    };

    match outcome {
        Outcome::Done => {
            let listing = admin.state();
            println!("Товары ({}):", listing.products.len());
            for product in &listing.products {
                println!(
                    "  #{:<4} {:<40} {:>14}  {}",
                    product.id,
                    product.name,
                    product.display_price(),
                    product.category.name
                );
            }
            println!("Категории ({}):", listing.categories.len());
            for category in &listing.categories {
                println!(
                    "  #{:<4} {:<40} {}",
                    category.id,
                    category.name,
                    category.description.as_deref().unwrap_or("-")
                );
            }
            println!("Слайды ({}):", listing.slides.len());
            for slide in &listing.slides {
                println!(
                    "  #{:<4} {:<40} порядок {} {}",
                    slide.id,
                    slide.title.as_deref().unwrap_or("-"),
                    slide.order,
                    if slide.is_active { "" } else { "(скрыт)" }
                );
            }
            true
        }
        Outcome::Cancelled => true,
        Outcome::Invalid | Outcome::Failed | Outcome::LoggedOut => false,
    }
}
