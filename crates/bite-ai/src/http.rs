//! Response status handling shared by client calls.

use crate::error::AiError;

/// Pass a success response through; turn anything else into
/// [`AiError::Api`] carrying the status and body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AiError> {
    if !resp.status().is_success() {
        return Err(AiError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn server_error_carries_status_and_body() {
        let resp = mock_response(500, "model crashed");
        let err = check_response(resp).await.unwrap_err();
        match err {
            AiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "model crashed");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn not_found_is_api_error() {
        let resp = mock_response(404, "model 'llama9' not found");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, AiError::Api { status: 404, .. }));
    }
}
