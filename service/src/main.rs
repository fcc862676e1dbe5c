use abi::RowsCount;
use anyhow::{Context, Result};
use booking::BookingManager;
use booking_service::{
    connect, load_config, resolve_zone, DetailView, FormMode, ListView, Route, RoomField,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Browse and edit bookings", long_about = None)]
struct Cli {
    /// YAML config file
    #[arg(short, long)]
    config: Option<String>,

    /// IANA zone for booking dates and times, or "local"
    #[arg(long)]
    timezone: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of the booking list
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Rows per page: 10, 15, 20 or 25
        #[arg(long)]
        rows: Option<u32>,
    },
    /// Show a booking
    Show { id: String },
    /// Edit a booking and save it
    Edit {
        id: String,
        /// Field assignment such as `guests=Alice,Bob`
        #[arg(long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },
    /// Fill in a new booking from an existing one (not submitted)
    Add {
        id: String,
        #[arg(long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
    },
    /// Open the view for a browser path such as `/` or `/rooms/42`
    Route { path: String },
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got {}", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("failed to load config")?;
    let zone = resolve_zone(&config, cli.timezone.as_deref())?;
    let api = connect(&config);

    match cli.command {
        Commands::List { page, rows } => {
            let rows = match rows {
                Some(rows) => RowsCount::try_from(rows)?,
                None => config.ui.rows_count,
            };
            let mut view = ListView::new(api, config.ui.rows_count, zone);
            view.mount().await?;
            if rows != config.ui.rows_count {
                view.change_rows_count(rows);
            }
            view.change_page(page);
            print_list(&view);
        }
        Commands::Show { id } => {
            let mut view = DetailView::new(api, id, zone);
            view.mount().await?;
            print_detail(&view);
        }
        Commands::Edit { id, set } => {
            let mut view = DetailView::new(api, id, zone);
            view.mount().await?;
            edit(&mut view, FormMode::Edit, &set).await?;
        }
        Commands::Add { id, set } => {
            let mut view = DetailView::new(api, id, zone);
            view.mount().await?;
            edit(&mut view, FormMode::Add, &set).await?;
        }
        Commands::Route { path } => match path.parse::<Route>()? {
            Route::Home => {
                let mut view = ListView::new(api, config.ui.rows_count, zone);
                view.mount().await?;
                print_list(&view);
            }
            Route::Room(id) => {
                let mut view = DetailView::new(api, id, zone);
                view.mount().await?;
                print_detail(&view);
            }
        },
    }

    Ok(())
}

async fn edit(
    view: &mut DetailView<BookingManager>,
    mode: FormMode,
    set: &[(String, String)],
) -> Result<()> {
    let form = view.form_mut();
    match mode {
        FormMode::Add => form.enter_add_mode(),
        _ => form.enter_edit_mode(),
    }
    for (name, value) in set {
        form.handle_named_change(name, value.as_str())?;
    }
    let outcome = view.save().await?;
    if let Some(ack) = outcome.acknowledgement() {
        println!("{}", ack);
    }
    if let Some(route) = outcome.navigate_to() {
        println!("-> {}", route);
    }
    print_detail(view);
    Ok(())
}

fn print_list(view: &ListView<BookingManager>) {
    for row in view.rows() {
        println!(
            "{:<32} {:<16} {:<16} {}",
            row.title,
            row.host_name,
            row.date.unwrap_or_default(),
            row.link
        );
    }

    let pager = view.pager();
    let buttons: Vec<String> = pager
        .page_buttons()
        .iter()
        .map(|b| {
            if b.active {
                format!("[{}]", b.label)
            } else {
                format!(" {} ", b.label)
            }
        })
        .collect();
    println!(
        "{} {} {}   page {} of {}, {} rows",
        if pager.has_prev() { "< Previous" } else { "          " },
        buttons.join(" "),
        if pager.has_next() { "Next >" } else { "" },
        pager.current_page(),
        pager.total_pages(),
        pager.rows_count()
    );
}

fn print_detail(view: &DetailView<BookingManager>) {
    let form = view.form();
    println!("{}", Route::Room(view.id().to_string()));
    for field in RoomField::ALL {
        println!("{:>10}: {}", field.name(), form.room().get(field));
    }
}
