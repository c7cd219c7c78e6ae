use std::{env, io};

use certcenter::{
    api::{DnsDataRequest, OrderParameters, OrderRequest, ValidateNameRequest},
    create_csr, create_p256_key, private_key_pem, Certificate, Client,
};
use tokio::fs;

const PRODUCT_CODE: &str = "AlwaysOnSSL.AlwaysOnSSL";

const CERTS_DIR: &str = "./certcenter-certs";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let domain = env::args()
        .nth(1)
        .ok_or_else(|| eyre::eyre!("usage: issue-certificate <domain>"))?;

    let client = Client::from_env()?;

    log::info!("checking that {domain} qualifies for {PRODUCT_CODE}");
    let name = client
        .validate_name(&ValidateNameRequest {
            common_name: domain.clone(),
            generate_private_key: false,
        })
        .await?;

    if !name.is_qualified {
        eyre::bail!("{domain} does not qualify: {}", name.info);
    }

    log::info!("generating private key and CSR");
    let key = create_p256_key();
    let csr = create_csr(&key, &[&domain])?;

    let dns = client
        .dns_data(&DnsDataRequest {
            product_code: PRODUCT_CODE.to_owned(),
            csr: csr.clone(),
        })
        .await?;

    log::info!("publish this record, then press enter:");
    log::info!("{}", dns.dns_auth_details.example);

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    log::info!("placing order");
    let order = client
        .order(&OrderRequest {
            order_parameters: Some(OrderParameters {
                product_code: PRODUCT_CODE.to_owned(),
                csr,
                validity_period: 180,
                dv_auth_method: "DNS".to_owned(),
                ..Default::default()
            }),
            ..Default::default()
        })
        .await?;

    if !order.info.is_success() {
        eyre::bail!("order failed: {}", order.info);
    }

    log::info!("order {} placed", order.certcenter_order_id);

    if !order.fulfillment.is_issued() {
        log::info!("certificate not issued yet, look it up later with order-lookup");
        return Ok(());
    }

    let cert = Certificate::from_fulfillment(private_key_pem(&key)?, &order.fulfillment)?;
    log::info!("certificate valid for {} days", cert.valid_days_left()?);

    fs::create_dir_all(CERTS_DIR).await?;
    fs::write(format!("{CERTS_DIR}/{domain}.key.pem"), cert.private_key()).await?;
    fs::write(format!("{CERTS_DIR}/{domain}.pem"), cert.certificate()).await?;

    log::info!("certificate and key written to {CERTS_DIR}");

    Ok(())
}
