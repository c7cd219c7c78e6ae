use crate::{
    api::{
        CreateVoucherRequest, CreateVoucherResult, DeleteVoucherRequest, DeleteVoucherResult,
        GetVoucherRequest, GetVouchersResult, NoParams, RedeemVoucherRequest, RedeemVoucherResult,
    },
    endpoint::Endpoint,
    Client,
};

impl Client {
    /// Create a voucher, a prepaid credit redeemable for a certificate order.
    pub async fn create_voucher(
        &self,
        req: &CreateVoucherRequest,
    ) -> eyre::Result<CreateVoucherResult> {
        self.call(Endpoint::CreateVoucher, req).await
    }

    /// Redeem a voucher, placing the order it pays for.
    pub async fn redeem_voucher(
        &self,
        req: &RedeemVoucherRequest,
    ) -> eyre::Result<RedeemVoucherResult> {
        self.call(Endpoint::RedeemVoucher, req).await
    }

    /// List all vouchers.
    pub async fn get_vouchers(&self) -> eyre::Result<GetVouchersResult> {
        self.call(Endpoint::GetVouchers, &NoParams).await
    }

    /// Fetch a single voucher. The result holds at most one entry.
    pub async fn get_voucher(&self, req: &GetVoucherRequest) -> eyre::Result<GetVouchersResult> {
        self.call(Endpoint::GetVoucher(req.voucher_code.clone()), &NoParams).await
    }

    /// Invalidate a voucher that hasn't been redeemed yet.
    pub async fn delete_voucher(
        &self,
        req: &DeleteVoucherRequest,
    ) -> eyre::Result<DeleteVoucherResult> {
        self.call(Endpoint::DeleteVoucher(req.voucher_code.clone()), &NoParams).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::{
            CreateVoucherRequest, DeleteVoucherRequest, GetVoucherRequest, OrderParameters,
            RedeemVoucherRequest,
        },
        test::{with_api_server, TOKEN},
        ApiUrl, Client,
    };

    #[tokio::test]
    async fn test_voucher_lifecycle() {
        let server = with_api_server();
        let client = Client::new(ApiUrl::Other(&server.api_url), TOKEN).unwrap();

        let req = CreateVoucherRequest {
            order_parameters: OrderParameters {
                product_code: "GeoTrust.QuickSSLPremium".to_owned(),
                validity_period: 12,
                ..Default::default()
            },
        };
        let created = client.create_voucher(&req).await.unwrap();
        assert_eq!(created.voucher_code, "VC-ABCDEF");

        let vouchers = client
            .get_voucher(&GetVoucherRequest {
                voucher_code: created.voucher_code.clone(),
            })
            .await
            .unwrap();
        assert_eq!(vouchers.vouchers.len(), 1);
        assert!(!vouchers.vouchers[0].redeemed);

        let all = client.get_vouchers().await.unwrap();
        assert_eq!(all.vouchers.len(), 1);

        let deleted = client
            .delete_voucher(&DeleteVoucherRequest {
                voucher_code: created.voucher_code,
            })
            .await
            .unwrap();
        assert!(deleted.order.info.success);
    }

    #[tokio::test]
    async fn test_redeem_voucher_body() {
        let server = with_api_server();
        let client = Client::new(ApiUrl::Other(&server.api_url), TOKEN).unwrap();

        let req = RedeemVoucherRequest {
            voucher_code: "VC-ABCDEF".to_owned(),
            order_parameters: Some(OrderParameters {
                csr: "-----BEGIN CERTIFICATE REQUEST-----".to_owned(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let res = client.redeem_voucher(&req).await.unwrap();

        let body: serde_json::Value = serde_json::from_str(&res.order.info.message).unwrap();
        assert_eq!(body["VoucherCode"], "VC-ABCDEF");
        assert_eq!(
            body["OrderParameters"]["CSR"],
            "-----BEGIN CERTIFICATE REQUEST-----"
        );
        assert!(body.get("AdminContact").is_none());
        assert_eq!(res.order.certcenter_order_id, 7654321);
    }
}
