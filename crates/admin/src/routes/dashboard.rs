//! Dashboard landing route.

use axum::response::Redirect;

/// Products is the default tab.
pub async fn index() -> Redirect {
    Redirect::to("/products")
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header::LOCATION};
    use axum::response::IntoResponse;

    use super::*;

    #[tokio::test]
    async fn test_index_redirects_to_products() {
        let response = index().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).map(|v| v.as_bytes()),
            Some("/products".as_bytes())
        );
    }
}
