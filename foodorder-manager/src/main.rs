use std::io::Write;

use clap::Parser;
use dotenvy::dotenv;
use foodorder_api::{FoodName, FoodType, HttpOrderApi, OrderApi, FOOD_PRICES};
use foodorder_manager::manager::OrderManager;
use foodorder_manager::view;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;

type Input = Lines<BufReader<Stdin>>;

#[derive(Parser)]
#[command(version, about = "Interactive client for the restaurant food order service")]
struct Cli {
    /// Collaborator endpoint, e.g. http://localhost:8080. Falls back to
    /// FOODORDER_SERVICE_ENDPOINT.
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let endpoint = match cli.endpoint {
        Some(endpoint) => endpoint,
        None => std::env::var("FOODORDER_SERVICE_ENDPOINT")
            .expect("FOODORDER_SERVICE_ENDPOINT required"),
    };

    let client = HttpOrderApi::new(endpoint);
    info!("food order manager talking to {}", client.base_url());

    let mut manager = OrderManager::new(client);
    manager.fetch_all_orders().await;

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    render(&manager);
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = input.next_line().await? else {
            break;
        };
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let argument = parts.next();

        match command {
            "" => continue,
            "help" => {
                print_help();
                continue;
            }
            "list" => manager.fetch_all_orders().await,
            "form" => fill_form(&mut input, &mut manager).await?,
            "submit" => {
                if manager.edit_mode() {
                    manager.update_order().await;
                } else {
                    manager.add_order().await;
                }
            }
            "edit" => match argument.and_then(|arg| arg.parse::<i32>().ok()) {
                Some(id) => {
                    match manager.orders().iter().find(|o| o.id == id).cloned() {
                        Some(order) => manager.start_edit(order),
                        None => println!("No order with ID {id} in the table."),
                    }
                }
                None => println!("Usage: edit <id>"),
            },
            "cancel" => manager.reset_form(),
            "delete" => match argument.and_then(|arg| arg.parse::<i32>().ok()) {
                Some(id) => manager.delete_order(id).await,
                None => println!("Usage: delete <id>"),
            },
            "get" => match argument {
                Some(id) => {
                    manager.set_id_to_fetch(id);
                    manager.fetch_order_by_id().await;
                }
                None => println!("Usage: get <id>"),
            },
            "show" => {}
            "quit" | "exit" => break,
            other => {
                println!("Unknown command: {other}");
                print_help();
                continue;
            }
        }
        render(&manager);
    }

    Ok(())
}

fn print_help() {
    println!(
        "Commands:\n  \
         list            refetch all orders\n  \
         form            fill the order form field by field\n  \
         submit          add the draft, or update it in edit mode\n  \
         edit <id>       load a table row into the form\n  \
         cancel          reset the form\n  \
         delete <id>     delete an order\n  \
         get <id>        look up one order by id\n  \
         show            redraw the screen\n  \
         quit            leave"
    );
}

fn render<C: OrderApi>(manager: &OrderManager<C>) {
    println!();
    println!("=== Restaurant Food Orders ===");
    if !manager.message().is_empty() {
        println!("[{}]", manager.message());
    }
    println!(
        "{}: {}",
        if manager.edit_mode() {
            "Edit Order"
        } else {
            "Add Order"
        },
        view::render_draft(manager.draft()),
    );
    if let Some(order) = manager.fetched_order() {
        println!("--- Fetched order ---");
        println!("{}", view::render_fetched(order));
    }
    println!("--- All orders ---");
    print!("{}", view::render_table(manager.orders()));
}

/// Walks the form fields in their wire order. An empty reply keeps the
/// current value, so editing only touches the fields the user changes.
async fn fill_form<C: OrderApi>(
    input: &mut Input,
    manager: &mut OrderManager<C>,
) -> std::io::Result<()> {
    let draft = manager.draft_mut();

    if let Some(reply) = prompt(input, "ID", &optional(draft.id)).await? {
        match reply.parse::<i32>() {
            Ok(id) => draft.id = Some(id),
            Err(_) => println!("Keeping previous value; ID must be a number."),
        }
    }

    let food_menu = numbered(&FoodName::ALL);
    if let Some(reply) = prompt(
        input,
        &format!("Food ({food_menu})"),
        &optional(draft.food_name),
    )
    .await?
    {
        match pick(&FoodName::ALL, &reply) {
            Some(name) => draft.food_name = Some(name),
            None => println!("Keeping previous value; pick a number from the menu."),
        }
    }

    let type_menu = numbered(&FoodType::ALL);
    if let Some(reply) = prompt(
        input,
        &format!("Type ({type_menu})"),
        &optional(draft.food_type),
    )
    .await?
    {
        match pick(&FoodType::ALL, &reply) {
            Some(food_type) => draft.food_type = Some(food_type),
            None => println!("Keeping previous value; pick a number from the menu."),
        }
    }

    let price_menu = numbered(&FOOD_PRICES);
    if let Some(reply) = prompt(
        input,
        &format!("Price ({price_menu})"),
        &draft.price().to_string(),
    )
    .await?
    {
        match pick(&FOOD_PRICES, &reply) {
            Some(price) => draft.set_price(price),
            None => println!("Keeping previous value; pick a number from the menu."),
        }
    }

    if let Some(reply) = prompt(input, "Quantity", &draft.quantity().to_string()).await? {
        match reply.parse::<i32>() {
            Ok(quantity) => draft.set_quantity(quantity),
            Err(_) => println!("Keeping previous value; quantity must be a number."),
        }
    }
    println!("Total cost: {}", draft.total_cost());

    if let Some(reply) = prompt(input, "Customer name", &draft.customer_name.clone()).await? {
        draft.customer_name = reply;
    }
    if let Some(reply) = prompt(input, "Contact", &draft.contact.clone()).await? {
        draft.contact = reply;
    }
    if let Some(reply) = prompt(input, "Address", &draft.address.clone()).await? {
        draft.address = reply;
    }

    Ok(())
}

/// Prints `label [current]: ` and reads one line. Returns `None` on EOF or
/// an empty reply (keep the current value).
async fn prompt(input: &mut Input, label: &str, current: &str) -> std::io::Result<Option<String>> {
    print!("{label} [{current}]: ");
    std::io::stdout().flush()?;
    match input.next_line().await? {
        Some(line) => {
            let line = line.trim().to_string();
            Ok(if line.is_empty() { None } else { Some(line) })
        }
        None => Ok(None),
    }
}

fn optional<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

fn numbered<T: std::fmt::Display>(options: &[T]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(index, option)| format!("{}={}", index + 1, option))
        .collect::<Vec<_>>()
        .join(", ")
}

fn pick<T: Copy>(options: &[T], reply: &str) -> Option<T> {
    let index = reply.parse::<usize>().ok()?.checked_sub(1)?;
    options.get(index).copied()
}
