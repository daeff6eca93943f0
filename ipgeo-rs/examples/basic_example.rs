use ipgeo_rs::GeoClient;

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let client = GeoClient::init(None).expect("failed to build HTTP client");

    let current_ip = match client.resolve_current_ip().await {
        Ok(ip) => {
            println!("Your current public IP: {ip}");
            Some(ip)
        }
        Err(e) => {
            println!("Error getting current IP: {e}");
            None
        }
    };

    let target = std::env::args()
        .nth(1)
        .or(current_ip)
        .unwrap_or_else(|| "8.8.8.8".to_string());

    match client.resolve_geolocation(&target).await {
        Ok(record) => println!("{record:#?}"),
        Err(e) => println!("{e}"),
    }
}
