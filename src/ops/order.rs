use crate::{
    api::{
        DeleteOrderRequest, DeleteOrderResult, GetModifiedOrdersRequest, GetModifiedOrdersResult,
        GetOrderRequest, GetOrderResult, GetOrdersRequest, GetOrdersResult, OrderRequest,
        OrderResult, ReissueRequest, ReissueResult, RevokeRequest, RevokeResult,
    },
    endpoint::Endpoint,
    Client,
};

impl Client {
    /// Submit an order for a regular, S/MIME or AlwaysOnSSL certificate.
    pub async fn order(&self, req: &OrderRequest) -> eyre::Result<OrderResult> {
        self.call(Endpoint::Order, req).await
    }

    /// Query and filter your orders.
    pub async fn get_orders(&self, req: &GetOrdersRequest) -> eyre::Result<GetOrdersResult> {
        self.call(Endpoint::GetOrders, req).await
    }

    /// Fetch orders modified within the timespan given by `req`.
    pub async fn get_modified_orders(
        &self,
        req: &GetModifiedOrdersRequest,
    ) -> eyre::Result<GetModifiedOrdersResult> {
        self.call(Endpoint::GetModifiedOrders, req).await
    }

    /// Query a particular order.
    pub async fn get_order(&self, req: &GetOrderRequest) -> eyre::Result<GetOrderResult> {
        self.call(Endpoint::GetOrder(req.certcenter_order_id), req).await
    }

    /// Cancel an order.
    pub async fn delete_order(&self, req: &DeleteOrderRequest) -> eyre::Result<DeleteOrderResult> {
        self.call(Endpoint::DeleteOrder(req.certcenter_order_id), req).await
    }

    /// Replace an existing certificate, e.g. after a key loss or for a key-size upgrade.
    pub async fn reissue(&self, req: &ReissueRequest) -> eyre::Result<ReissueResult> {
        self.call(Endpoint::Reissue, req).await
    }

    /// Mark a certificate as invalid.
    pub async fn revoke(&self, req: &RevokeRequest) -> eyre::Result<RevokeResult> {
        self.call(Endpoint::Revoke(req.certcenter_order_id), req).await
    }
}
