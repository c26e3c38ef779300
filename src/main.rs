use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use userdesk::app::App;
use userdesk::config::Config;
use userdesk::gateway::HttpUserSource;
use userdesk::logging::init_tracing;
use userdesk::model::User;
use userdesk::view::ListViewIntent;

#[derive(Debug, Parser)]
#[command(name = "userdesk", version, about = "List and inspect users from the remote user API")]
struct Args {
    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only show users whose name or email contains this text.
    #[arg(long, default_value = "")]
    search: String,

    /// Sort names Z to A.
    #[arg(long)]
    desc: bool,

    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Rows per page; must be one of the configured options.
    #[arg(long)]
    page_size: Option<usize>,

    /// Show the details of the user with this id instead of the list.
    #[arg(long)]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let source = HttpUserSource::new(&config.source).context("building HTTP client")?;
    let mut app = App::new(&config);

    if let Err(err) = app.initialize(&source).await {
        eprintln!("Could not load users from {}: {}", source.url(), err);
    }

    for intent in view_intents(&args, app.list_view().page_size) {
        app.update_list_view(intent);
    }

    match &args.user {
        Some(key) => match app.find_user(key) {
            Some(user) => print_details(user),
            None => println!("User not found!"),
        },
        None => print_page(&app),
    }

    Ok(())
}

fn view_intents(args: &Args, current_page_size: usize) -> Vec<ListViewIntent> {
    let mut intents = vec![ListViewIntent::SetSearch {
        text: args.search.clone(),
    }];
    if args.desc {
        intents.push(ListViewIntent::ToggleSort);
    }
    intents.push(ListViewIntent::ChangePage {
        page: args.page,
        page_size: args.page_size.unwrap_or(current_page_size),
    });
    intents
}

fn print_page(app: &App) {
    let view = app.list_view();
    let page = app.current_page();

    println!("{:<16} {:<28} {:<32} {}", "ID", "NAME", "EMAIL", "COMPANY");
    for user in &page.items {
        println!(
            "{:<16} {:<28} {:<32} {}",
            user.id, user.name, user.email, user.company.name
        );
    }
    println!(
        "page {}/{} ({} users, {} per page, {})",
        view.page,
        page.page_count(view.page_size).max(1),
        page.total,
        view.page_size,
        view.order.label()
    );
}

fn print_details(user: &User) {
    println!("{}", user.name);
    println!("Email:   {}", user.email);
    println!("Company: {}", user.company.name);
    println!("Phone:   {}", user.phone_display());
    println!("Website: {}", user.website_display());
}
