use crate::{
    api::{
        ApproverListRequest, ApproverListResult, DnsDataRequest, DnsDataResult, FileDataRequest,
        FileDataResult, NoParams, PutApproverEmailRequest, PutApproverEmailResult,
        ResendApproverEmailRequest, ResendApproverEmailResult, ValidateCsrRequest,
        ValidateCsrResult, ValidateNameRequest, ValidateNameResult,
        VulnerabilityAssessmentRequest, VulnerabilityAssessmentRescanRequest,
        VulnerabilityAssessmentRescanResult, VulnerabilityAssessmentResult,
    },
    endpoint::Endpoint,
    Client,
};

impl Client {
    /// Parse and validate a PEM-encoded PKCS#10 CSR.
    pub async fn validate_csr(&self, req: &ValidateCsrRequest) -> eyre::Result<ValidateCsrResult> {
        self.call(Endpoint::ValidateCsr, req).await
    }

    /// Fetch the valid approver email addresses for a common name and product.
    pub async fn approver_list(
        &self,
        req: &ApproverListRequest,
    ) -> eyre::Result<ApproverListResult> {
        self.call(Endpoint::ApproverList, req).await
    }

    /// Reset the approver email address of an order.
    pub async fn put_approver_email(
        &self,
        req: &PutApproverEmailRequest,
    ) -> eyre::Result<PutApproverEmailResult> {
        self.call(Endpoint::PutApproverEmail(req.certcenter_order_id), req).await
    }

    /// Resend the approver email to the approver's address.
    pub async fn resend_approver_email(
        &self,
        req: &ResendApproverEmailRequest,
    ) -> eyre::Result<ResendApproverEmailResult> {
        self.call(
            Endpoint::ResendApproverEmail(req.certcenter_order_id),
            &NoParams,
        )
        .await
    }

    /// Check a common name against the Symantec EE blacklist (AlwaysOnSSL only).
    pub async fn validate_name(
        &self,
        req: &ValidateNameRequest,
    ) -> eyre::Result<ValidateNameResult> {
        self.call(Endpoint::ValidateName, req).await
    }

    /// Retrieve the record for DNS based validation (AlwaysOnSSL only).
    pub async fn dns_data(&self, req: &DnsDataRequest) -> eyre::Result<DnsDataResult> {
        self.call(Endpoint::DnsData, req).await
    }

    /// Retrieve the file for FILE based validation (AlwaysOnSSL only).
    pub async fn file_data(&self, req: &FileDataRequest) -> eyre::Result<FileDataResult> {
        self.call(Endpoint::FileData, req).await
    }

    /// Configure the vulnerability assessment of an order (Symantec certificates only).
    pub async fn vulnerability_assessment(
        &self,
        req: &VulnerabilityAssessmentRequest,
    ) -> eyre::Result<VulnerabilityAssessmentResult> {
        self.call(Endpoint::VulnerabilityAssessment, req).await
    }

    /// Initiate a vulnerability re-scan of an order.
    pub async fn vulnerability_assessment_rescan(
        &self,
        req: &VulnerabilityAssessmentRescanRequest,
    ) -> eyre::Result<VulnerabilityAssessmentRescanResult> {
        self.call(
            Endpoint::VulnerabilityAssessmentRescan(req.certcenter_order_id),
            &NoParams,
        )
        .await
    }
}
