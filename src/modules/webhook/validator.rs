use super::message::SnsMessage;
use crate::infrastructure::http::fetcher::{FetchError, HttpFetcher};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use regex::Regex;
use ring::signature::{
    RSA_PKCS1_2048_8192_SHA1_FOR_LEGACY_USE_ONLY, RSA_PKCS1_2048_8192_SHA256, UnparsedPublicKey,
    VerificationAlgorithm,
};
use std::sync::Arc;
use url::Url;
use x509_parser::pem::parse_x509_pem;

/// Hosts SNS serves its signing certificates from.
pub const SNS_CERT_HOST_PATTERN: &str = r"^sns\.[a-zA-Z0-9\-]{3,}\.amazonaws\.com(\.cn)?$";

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("Malformed SNS envelope: {0}")]
    MalformedEnvelope(#[from] serde_json::Error),

    #[error("Signing certificate URL is not trusted: {0}")]
    UntrustedCertificateUrl(String),

    #[error("Could not fetch signing certificate: {0}")]
    CertificateFetch(#[from] FetchError),

    #[error("Invalid signing certificate: {0}")]
    InvalidCertificate(String),

    #[error("Unsupported signature version: {0}")]
    UnsupportedSignatureVersion(String),

    #[error("Signature is not valid base64")]
    InvalidSignatureEncoding,

    #[error("Signature does not match message")]
    SignatureMismatch,
}

/// Checks that a message was signed by SNS with a certificate served from an SNS host.
#[derive(Clone)]
pub struct SnsMessageValidator {
    fetcher: Arc<dyn HttpFetcher>,
    host_pattern: Regex,
}

impl SnsMessageValidator {
    pub fn new(fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self {
            fetcher,
            host_pattern: Regex::new(SNS_CERT_HOST_PATTERN).expect("valid SNS host pattern"),
        }
    }

    /// Parses a raw request body and validates it.
    pub async fn verify(&self, body: &[u8]) -> Result<SnsMessage, VerifyError> {
        let message = SnsMessage::from_slice(body)?;
        self.validate(&message).await?;
        Ok(message)
    }

    pub async fn validate(&self, message: &SnsMessage) -> Result<(), VerifyError> {
        let algorithm: &'static dyn VerificationAlgorithm = match message.signature_version.as_str() {
            "1" => &RSA_PKCS1_2048_8192_SHA1_FOR_LEGACY_USE_ONLY,
            "2" => &RSA_PKCS1_2048_8192_SHA256,
            other => return Err(VerifyError::UnsupportedSignatureVersion(other.to_string())),
        };

        self.check_certificate_url(&message.signing_cert_url)?;

        let signature = STANDARD
            .decode(message.signature.as_bytes())
            .map_err(|_| VerifyError::InvalidSignatureEncoding)?;

        let pem_bytes = self.fetcher.fetch(&message.signing_cert_url).await?;
        let public_key = rsa_public_key(&pem_bytes)?;

        UnparsedPublicKey::new(algorithm, public_key)
            .verify(message.string_to_sign().as_bytes(), &signature)
            .map_err(|_| VerifyError::SignatureMismatch)
    }

    fn check_certificate_url(&self, raw: &str) -> Result<(), VerifyError> {
        let untrusted = || VerifyError::UntrustedCertificateUrl(raw.to_string());
        let url = Url::parse(raw).map_err(|_| untrusted())?;

        let host_ok = url
            .host_str()
            .is_some_and(|host| self.host_pattern.is_match(host));

        if url.scheme() != "https" || !url.path().ends_with(".pem") || !host_ok {
            return Err(untrusted());
        }

        Ok(())
    }
}

/// Extracts the DER `RSAPublicKey` from a PEM certificate that is currently valid.
fn rsa_public_key(pem_bytes: &[u8]) -> Result<Vec<u8>, VerifyError> {
    let (_, pem) = parse_x509_pem(pem_bytes)
        .map_err(|e| VerifyError::InvalidCertificate(e.to_string()))?;
    let certificate = pem
        .parse_x509()
        .map_err(|e| VerifyError::InvalidCertificate(e.to_string()))?;

    if !certificate.validity().is_valid() {
        return Err(VerifyError::InvalidCertificate(
            "certificate is outside its validity period".to_string(),
        ));
    }

    Ok(certificate.public_key().subject_public_key.data.to_vec())
}
