//! One method per API operation.
//!
//! Each method picks the [`Endpoint`](crate::Endpoint) for the operation, forwards the request
//! object and decodes the typed result.

mod order;
mod user;
mod validation;
mod voucher;

use crate::{
    api::{
        LimitResult, NoParams, ProductDetailsRequest, ProductDetailsResult, ProductsResult,
        ProfileResult, QuoteRequest, QuoteResult, UserAgreementRequest, UserAgreementResult,
    },
    endpoint::Endpoint,
    Client,
};

impl Client {
    /// Fetch basic information about your profile.
    pub async fn profile(&self) -> eyre::Result<ProfileResult> {
        self.call(Endpoint::Profile, &NoParams).await
    }

    /// Inquire your current limit and the amount already used.
    pub async fn limit(&self) -> eyre::Result<LimitResult> {
        self.call(Endpoint::Limit, &NoParams).await
    }

    /// Fetch the list of valid product codes.
    pub async fn products(&self) -> eyre::Result<ProductsResult> {
        self.call(Endpoint::Products, &NoParams).await
    }

    /// Inquire detailed information on a particular product code.
    pub async fn product_details(&self, product_code: &str) -> eyre::Result<ProductDetailsResult> {
        let req = ProductDetailsRequest::new(product_code);
        self.call(Endpoint::ProductDetails, &req).await
    }

    /// Generate an individual real-time quotation.
    pub async fn quote(&self, req: &QuoteRequest) -> eyre::Result<QuoteResult> {
        self.call(Endpoint::Quote, req).await
    }

    /// Fetch the latest subscriber agreement of the CA behind `product_code`.
    pub async fn user_agreement(&self, product_code: &str) -> eyre::Result<UserAgreementResult> {
        let req = UserAgreementRequest::new(product_code);
        self.call(Endpoint::UserAgreement, &req).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{api::QuoteRequest, ApiUrl, Client};

    #[tokio::test]
    async fn test_profile() {
        let server = crate::test::with_api_server();
        let client = Client::new(ApiUrl::Other(&server.api_url), crate::test::TOKEN).unwrap();

        let profile = client.profile().await.unwrap();
        assert_eq!(profile.customer_id, 123456);
        assert_eq!(profile.currency, "EUR");
    }

    #[tokio::test]
    async fn test_product_details_query() {
        let server = crate::test::with_api_server();
        let client = Client::new(ApiUrl::Other(&server.api_url), crate::test::TOKEN).unwrap();

        let res = client.product_details("Symantec.SecureSite").await.unwrap();
        assert!(res.info.success);
        // the test server echoes the query string into ProductName
        assert_eq!(
            res.product_details.product_name,
            "ProductCode=Symantec.SecureSite"
        );
    }

    #[tokio::test]
    async fn test_limit_and_products() {
        let server = crate::test::with_api_server();
        let client = Client::new(ApiUrl::Other(&server.api_url), crate::test::TOKEN).unwrap();

        let limit = client.limit().await.unwrap();
        assert_eq!(limit.limit_info.remaining(), 750.0);

        let products = client.products().await.unwrap();
        assert_eq!(
            products.products,
            ["AlwaysOnSSL.AlwaysOnSSL", "Comodo.PositiveSSL"]
        );
    }

    #[tokio::test]
    async fn test_quote_query() {
        let server = crate::test::with_api_server();
        let client = Client::new(ApiUrl::Other(&server.api_url), crate::test::TOKEN).unwrap();

        let req = QuoteRequest {
            product_code: "Comodo.PositiveSSL".to_owned(),
            subject_alt_name_count: 0,
            validity_period: 12,
            server_count: 1,
        };
        let res = client.quote(&req).await.unwrap();

        assert_eq!(
            res.info.message,
            "ProductCode=Comodo.PositiveSSL&SubjectAltNameCount=0&ValidityPeriod=12&ServerCount=1"
        );
        assert_eq!(res.price, 158.0);
    }

    #[tokio::test]
    async fn test_user_agreement_query() {
        let server = crate::test::with_api_server();
        let client = Client::new(ApiUrl::Other(&server.api_url), crate::test::TOKEN).unwrap();

        let res = client.user_agreement("Comodo.PositiveSSL").await.unwrap();
        assert_eq!(res.info.message, "ProductCode=Comodo.PositiveSSL");
        assert_eq!(res.user_agreement, "Subscriber Agreement");
    }
}
