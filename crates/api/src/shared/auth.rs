use crate::error::RemindlyError;
use actix_web::HttpRequest;
use remindly_infra::RemindlyContext;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Only lets requests through that carry the configured admin api key
pub fn protect_admin_route(
    http_req: &HttpRequest,
    ctx: &RemindlyContext,
) -> Result<(), RemindlyError> {
    let api_key = http_req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match api_key {
        Some(api_key) if api_key == ctx.config.admin_api_key => Ok(()),
        Some(_) => Err(RemindlyError::Unauthorized(format!(
            "Invalid api key provided in the `{}` header",
            API_KEY_HEADER
        ))),
        None => Err(RemindlyError::Unauthorized(format!(
            "Admin routes require the `{}` header",
            API_KEY_HEADER
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn admin_route_requires_matching_key() {
        let mut ctx = RemindlyContext::create_inmemory();
        ctx.config.admin_api_key = "secret".into();

        let req = TestRequest::default()
            .insert_header((API_KEY_HEADER, "secret"))
            .to_http_request();
        assert!(protect_admin_route(&req, &ctx).is_ok());

        let req = TestRequest::default()
            .insert_header((API_KEY_HEADER, "wrong"))
            .to_http_request();
        assert!(protect_admin_route(&req, &ctx).is_err());

        let req = TestRequest::default().to_http_request();
        assert!(protect_admin_route(&req, &ctx).is_err());
    }
}
