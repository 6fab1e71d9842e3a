// frontdesk-client/examples/front_desk_demo.rs
// Log in, load the room map and print a floor-by-floor summary.

use frontdesk_client::{ClientConfig, FrontDesk};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <email> <password>", args[0]);
        println!(
            "  Example: {} recepcion@hotel.example secret123",
            args[0]
        );
        return Ok(());
    }

    let email = &args[1];
    let password = &args[2];

    let base_url = std::env::var("HOTEL_API_URL")
        .unwrap_or_else(|_| "http://localhost:8000/api/v1".to_string());

    let config = ClientConfig::new(&base_url);
    let mut api = config.build_api()?;

    let login = match api.login(email, password).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Failed to login: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!("Logged in as: {}", login.user.name);

    let mut desk = FrontDesk::new(api);
    desk.refresh_directory().await?;

    let stats = desk.directory().stats();
    println!(
        "{} rooms: {} available, {} occupied, {} cleaning, {} maintenance",
        stats.total, stats.available, stats.occupied, stats.cleaning, stats.maintenance
    );

    for (floor, rooms) in desk.directory().by_floor() {
        let line: Vec<String> = rooms
            .iter()
            .map(|r| format!("{} ({})", r.number, r.status.as_str()))
            .collect();
        println!("floor {}: {}", floor, line.join(", "));
    }

    Ok(())
}
