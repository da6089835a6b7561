//! Shared AWS plumbing for the Translate and Polly gateways.

use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{Region, SdkConfig};
use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use std::error::Error as StdError;
use std::fmt::Debug;

use crate::error::GatewayError;
use crate::settings::AwsSettings;

/// Error codes AWS services use for credential and signature problems.
const AUTH_ERROR_CODES: &[&str] = &[
    "AccessDeniedException",
    "ExpiredTokenException",
    "IncompleteSignature",
    "InvalidClientTokenId",
    "InvalidSignatureException",
    "MissingAuthenticationToken",
    "NotAuthorized",
    "UnrecognizedClientException",
];

/// Loads an SDK config for `region`. SDK retries are disabled: a failed call
/// is reported to the user as-is.
pub async fn load_sdk_config(settings: &AwsSettings, region: &str) -> SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .retry_config(RetryConfig::disabled())
        .timeout_config(
            TimeoutConfig::builder()
                .connect_timeout(settings.connect_timeout())
                .operation_timeout(settings.operation_timeout())
                .build(),
        );

    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }

    loader.load().await
}

/// Collapses an SDK failure into a [`GatewayError`].
///
/// `is_transient` decides which modeled service errors (throttling,
/// unavailable) are worth retrying.
pub(crate) fn gateway_error<E, R>(
    operation: &str,
    err: SdkError<E, R>,
    is_transient: impl FnOnce(&E) -> bool,
) -> GatewayError
where
    E: ProvideErrorMetadata + StdError + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    tracing::warn!(operation, error = %DisplayErrorContext(&err), "AWS call failed");

    match err {
        SdkError::ServiceError(context) => {
            let service_err = context.err();
            let code = service_err.code().unwrap_or("Unknown");
            let detail = service_err
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| service_err.to_string());
            let message = format!("{operation} failed ({code}): {detail}");

            if AUTH_ERROR_CODES.contains(&code) {
                GatewayError::auth(message)
            } else {
                let transient = is_transient(service_err);
                GatewayError::service(message).with_transient(transient)
            }
        }
        SdkError::TimeoutError(_) => GatewayError::network(format!("{operation} timed out")),
        SdkError::ResponseError(_) => GatewayError::parse(format!(
            "{operation} returned an unreadable response: {}",
            DisplayErrorContext(&err)
        )),
        other => {
            let detail = DisplayErrorContext(&other).to_string();
            let message = format!("{operation} failed: {detail}");
            // Credential resolution happens before dispatch and only shows up
            // in the error text.
            if detail.to_lowercase().contains("credentials") {
                GatewayError::auth(message)
            } else if matches!(other, SdkError::DispatchFailure(_)) {
                GatewayError::network(message)
            } else {
                GatewayError::service(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayErrorKind;
    use aws_sdk_translate::operation::translate_text::TranslateTextError;
    use aws_sdk_translate::types::error::TooManyRequestsException;
    use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
    use aws_smithy_runtime_api::client::result::ConnectorError;
    use aws_smithy_runtime_api::http::StatusCode;
    use aws_smithy_types::body::SdkBody;
    use aws_smithy_types::error::ErrorMetadata;

    fn response(status: u16) -> HttpResponse {
        HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::empty())
    }

    fn service_error(
        err: TranslateTextError,
        status: u16,
    ) -> SdkError<TranslateTextError, HttpResponse> {
        SdkError::service_error(err, response(status))
    }

    #[test]
    fn unrecognized_client_is_auth() {
        let meta = ErrorMetadata::builder()
            .code("UnrecognizedClientException")
            .message("The security token included in the request is invalid.")
            .build();
        let err = service_error(TranslateTextError::generic(meta), 400);

        let mapped = gateway_error("TranslateText", err, |_| false);

        assert_eq!(mapped.kind, GatewayErrorKind::Auth);
        assert!(mapped.message.contains("security token"));
        assert!(!mapped.is_transient());
    }

    #[test]
    fn throttling_is_transient_service_error() {
        let throttled = TooManyRequestsException::builder()
            .message("Rate exceeded")
            .build();
        let err = service_error(TranslateTextError::TooManyRequestsException(throttled), 429);

        let mapped = gateway_error("TranslateText", err, |e| {
            matches!(e, TranslateTextError::TooManyRequestsException(_))
        });

        assert_eq!(mapped.kind, GatewayErrorKind::Service);
        assert!(mapped.is_transient());
        assert!(mapped.message.contains("Rate exceeded"));
    }

    #[test]
    fn timeout_is_network() {
        let err: SdkError<TranslateTextError, HttpResponse> =
            SdkError::timeout_error("deadline elapsed");

        let mapped = gateway_error("TranslateText", err, |_| false);

        assert_eq!(mapped.kind, GatewayErrorKind::Network);
        assert!(mapped.is_transient());
    }

    #[test]
    fn response_error_is_parse() {
        let err: SdkError<TranslateTextError, HttpResponse> =
            SdkError::response_error("truncated body", response(200));

        let mapped = gateway_error("TranslateText", err, |_| false);

        assert_eq!(mapped.kind, GatewayErrorKind::Parse);
    }

    #[test]
    fn dispatch_failure_is_transient_network_error() {
        let err: SdkError<TranslateTextError, HttpResponse> =
            SdkError::dispatch_failure(ConnectorError::io("connection refused".into()));

        let mapped = gateway_error("TranslateText", err, |_| false);

        assert_eq!(mapped.kind, GatewayErrorKind::Network);
        assert!(mapped.is_transient());
        assert!(mapped.message.starts_with("TranslateText failed"));
    }

    #[test]
    fn missing_credentials_is_auth() {
        let err: SdkError<TranslateTextError, HttpResponse> =
            SdkError::construction_failure("no credentials in the property bag");

        let mapped = gateway_error("TranslateText", err, |_| false);

        assert_eq!(mapped.kind, GatewayErrorKind::Auth);
        assert!(!mapped.is_transient());
    }

    #[test]
    fn unmodeled_service_error_is_not_transient() {
        let meta = ErrorMetadata::builder()
            .code("UnsupportedLanguagePairException")
            .message("Unsupported language pair: en to xx")
            .build();
        let err = service_error(TranslateTextError::generic(meta), 400);

        let mapped = gateway_error("TranslateText", err, |_| false);

        assert_eq!(mapped.kind, GatewayErrorKind::Service);
        assert!(!mapped.is_transient());
        assert_eq!(
            mapped.message,
            "TranslateText failed (UnsupportedLanguagePairException): Unsupported language pair: en to xx"
        );
    }
}
