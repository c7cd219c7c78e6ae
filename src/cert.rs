use std::io::{BufReader, Cursor};

use der::{
    asn1::Ia5String,
    pem::LineEnding,
    time::{OffsetDateTime, PrimitiveDateTime},
    Decode as _, EncodePem as _,
};
use eyre::{eyre, WrapErr as _};
use pkcs8::{DecodePrivateKey as _, EncodePrivateKey as _};
use x509_cert::{
    builder::{Builder, RequestBuilder as CsrBuilder},
    ext::pkix::{name::GeneralName, SubjectAltName},
    name::Name,
};
use zeroize::Zeroizing;

use crate::api::OrderFulfillment;

/// Make a P-256 private key (from which we can derive a public key).
pub fn create_p256_key() -> p256::ecdsa::SigningKey {
    let csprng = &mut rand::thread_rng();
    ecdsa::SigningKey::from(p256::SecretKey::random(csprng))
}

/// PKCS#8 PEM encoding of `key`, to be stored next to the issued certificate.
pub fn private_key_pem(key: &p256::ecdsa::SigningKey) -> eyre::Result<Zeroizing<String>> {
    key.to_pkcs8_pem(LineEnding::LF).wrap_err("encode private key")
}

/// Creates a PEM-encoded PKCS#10 CSR for `domains` and signs it with `signer`.
///
/// The first item of `domains` is picked for the CSR's Common Name (CN). When there are more, all
/// domains are added to a Subject Alternative Name (SAN) extension.
///
/// The result can be used as `CSR` of an order, reissue or validation request.
pub fn create_csr(signer: &p256::ecdsa::SigningKey, domains: &[&str]) -> eyre::Result<String> {
    let primary_domain = domains
        .first()
        .ok_or_else(|| eyre!("a CSR needs at least one domain"))?;

    let subject = format!("CN={primary_domain}")
        .parse::<Name>()
        .wrap_err_with(|| format!("invalid common name: {primary_domain}"))?;

    let mut csr =
        CsrBuilder::new(subject, signer).map_err(|err| eyre!("create CSR builder: {err}"))?;

    if domains.len() > 1 {
        let names = domains
            .iter()
            .map(|domain| {
                Ia5String::new(domain)
                    .map(GeneralName::DnsName)
                    .wrap_err_with(|| format!("invalid domain: {domain}"))
            })
            .collect::<eyre::Result<Vec<_>>>()?;

        csr.add_extension(&SubjectAltName(names)).map_err(|err| eyre!("add SAN extension: {err}"))?;
    }

    let csr = csr
        .build::<p256::ecdsa::DerSignature>()
        .map_err(|err| eyre!("build CSR: {err}"))?;

    csr.to_pem(LineEnding::LF).wrap_err("encode CSR")
}

/// Encapsulated certificate and private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    private_key_pem: Zeroizing<String>,
    certificate: String,
}

impl Certificate {
    /// Pair `private_key_pem` with a PEM certificate chain, end-entity certificate first.
    pub fn parse(private_key_pem: Zeroizing<String>, certificate: String) -> eyre::Result<Self> {
        // validate end-entity certificate
        let cert_chain = pem_chain_to_der(&certificate)?;
        let cert_ee = cert_chain
            .first()
            .ok_or_else(|| eyre!("no certificates in chain"))?;
        x509_cert::Certificate::from_der(cert_ee)?;

        // validate private key
        ecdsa::SigningKey::<p256::NistP256>::from_pkcs8_pem(&private_key_pem)?;

        Ok(Certificate {
            private_key_pem,
            certificate,
        })
    }

    /// Pair the certificate and intermediate of an immediately fulfilled order with the key the
    /// CSR was signed with.
    pub fn from_fulfillment(
        private_key_pem: Zeroizing<String>,
        fulfillment: &OrderFulfillment,
    ) -> eyre::Result<Self> {
        if !fulfillment.is_issued() {
            return Err(eyre!("order has not been fulfilled"));
        }

        let mut chain = fulfillment.certificate.trim_end().to_owned();
        if !fulfillment.intermediate.is_empty() {
            chain.push('\n');
            chain.push_str(fulfillment.intermediate.trim_end());
        }
        chain.push('\n');

        Certificate::parse(private_key_pem, chain)
    }

    /// The private key in PEM format.
    pub fn private_key(&self) -> &str {
        &self.private_key_pem
    }

    /// The issued certificate file in PEM format.
    pub fn certificate(&self) -> &str {
        &self.certificate
    }

    /// The issued certificate chain in DER format.
    pub fn certificate_chain(&self) -> eyre::Result<Vec<Vec<u8>>> {
        pem_chain_to_der(self.certificate())
    }

    /// Inspect the certificate to count the number of (whole) valid days left.
    ///
    /// It is possible to get negative days for an expired certificate.
    pub fn valid_days_left(&self) -> eyre::Result<i64> {
        let cert_chain = self.certificate_chain()?;
        let cert_ee = cert_chain
            .first() // EE cert is first
            .ok_or_else(|| eyre!("no certificates in chain"))?;

        let cert = x509_cert::Certificate::from_der(cert_ee)?;

        let not_after = cert.tbs_certificate.validity.not_after.to_date_time();
        // X.509 validity times are always UTC
        let not_after = PrimitiveDateTime::try_from(not_after)?.assume_utc();

        let diff = not_after - OffsetDateTime::now_utc();

        Ok(diff.whole_days())
    }
}

fn pem_chain_to_der(pem: &str) -> eyre::Result<Vec<Vec<u8>>> {
    let mut rdr = BufReader::new(Cursor::new(pem));

    rustls_pemfile::certs(&mut rdr)
        .map(|res| res.map(|cert| cert.to_vec()))
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("read PEM certificate chain")
}
