use super::*;

#[test]
fn bearer_formats_token() {
    assert_eq!(bearer(Some("tok123")), "Bearer tok123");
}

#[test]
fn bearer_without_token_is_empty_credential() {
    assert_eq!(bearer(None), "Bearer ");
}

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status(DOCUMENTS_PATH, 200), Ok(()));
    assert_eq!(check_status(LOGOUT_PATH, 205), Ok(()));
}

#[test]
fn check_status_rejects_other_codes() {
    assert_eq!(
        check_status(LOGOUT_PATH, 401),
        Err(ApiError::Status { endpoint: LOGOUT_PATH, status: 401 })
    );
    assert_eq!(
        check_status(DOCUMENTS_PATH, 302),
        Err(ApiError::Status { endpoint: DOCUMENTS_PATH, status: 302 })
    );
}

#[test]
fn status_error_message_names_endpoint() {
    let err = ApiError::Status { endpoint: DOCUMENTS_PATH, status: 500 };
    assert_eq!(err.to_string(), "api/documents/ returned status 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let cfg = ApiConfig::new("http://backend");
    let result = futures::executor::block_on(fetch_documents(&cfg, Some("tok")));
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(logout(cfg, None, None));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn within_returns_response_that_beats_timer() {
    let result = futures::executor::block_on(within(
        futures::future::ready(Ok::<u8, ApiError>(7)),
        futures::future::pending::<()>(),
    ));
    assert_eq!(result, Ok(7));
}

#[test]
fn within_times_out_hung_request() {
    let result = futures::executor::block_on(within(
        futures::future::pending::<Result<(), ApiError>>(),
        futures::future::ready(()),
    ));
    assert_eq!(result, Err(ApiError::Timeout));
}
