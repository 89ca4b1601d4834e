use aws_config::{BehaviorVersion, Region, SdkConfig};
use secrecy::ExposeSecret;
use seewrite_config::AwsConfig;

/// Build the SDK configuration shared by every AWS capability
///
/// Static credentials are used when both keys are configured, otherwise the
/// default provider chain applies.
pub async fn sdk_config(config: &AwsConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(Region::new(config.region.clone()));

    if let (Some(access_key), Some(secret_key)) = (&config.access_key_id, &config.secret_access_key) {
        let credentials = aws_credential_types::Credentials::new(
            access_key.expose_secret(),
            secret_key.expose_secret(),
            None,
            None,
            "seewrite-config",
        );
        loader = loader.credentials_provider(credentials);
    }

    tracing::debug!(region = %config.region, "loading AWS configuration");

    loader.load().await
}
