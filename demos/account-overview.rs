use certcenter::Client;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let client = Client::from_env()?;

    log::info!("fetching profile");
    let profile = client.profile().await?;
    log::info!(
        "customer {} ({}, {})",
        profile.customer_id,
        profile.locale,
        profile.currency
    );

    log::info!("fetching limit");
    let limit = client.limit().await?;
    if limit.info.is_success() {
        log::info!(
            "used {} of {}, {} remaining",
            limit.limit_info.used,
            limit.limit_info.limit,
            limit.limit_info.remaining()
        );
    } else {
        log::warn!("limit unavailable: {}", limit.info);
    }

    log::info!("fetching products");
    let products = client.products().await?;

    for product_code in &products.products {
        let details = client.product_details(product_code).await?;
        let details = details.product_details;

        log::info!(
            "{product_code}: {} ({} months max, {} {})",
            details.product_name,
            details.max_validity_period,
            details.price,
            details.currency
        );
    }

    Ok(())
}
