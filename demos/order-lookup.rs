use std::env;

use certcenter::{api::GetOrderRequest, ApiError, Client};
use eyre::WrapErr as _;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let order_id = env::args()
        .nth(1)
        .ok_or_else(|| eyre::eyre!("usage: order-lookup <CertCenterOrderID>"))?
        .parse::<i64>()
        .wrap_err("CertCenterOrderID must be a number")?;

    let client = Client::from_env()?;

    log::info!("fetching order {order_id}");
    let res = client
        .get_order(&GetOrderRequest {
            include_fulfillment: true,
            include_order_parameters: true,
            include_dcv_status: true,
            ..GetOrderRequest::new(order_id)
        })
        .await;

    let res = match res {
        Ok(res) => res,
        Err(err) if matches!(err.downcast_ref::<ApiError>(), Some(ApiError::Unauthorized)) => {
            log::error!("token was rejected, check CERTCENTER_API_TOKEN");
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    if !res.info.is_success() {
        log::warn!("lookup failed: {}", res.info);
        return Ok(());
    }

    let order = res.order_info;
    log::info!(
        "{} for {}: {} {}",
        order.order_parameters.product_code,
        order.common_name,
        order.order_status.major_status,
        order.order_status.minor_status
    );

    for dcv in &order.dcv_status {
        log::info!("domain validation of {}: {}", dcv.domain, dcv.status);
    }

    if order.order_status.is_complete() {
        println!("{}", order.fulfillment.certificate);
    }

    Ok(())
}
