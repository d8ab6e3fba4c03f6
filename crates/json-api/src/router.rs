//! App Router

use salvo::Router;

use crate::{auth, ping, products};

/// Public reads plus token-guarded writes.
///
/// `search` is registered ahead of `{id}` so it is never parsed as an ID.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("ping").get(ping::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("search").get(products::search::handler))
                .push(Router::with_path("{id}").get(products::get::handler)),
        )
        .push(
            Router::with_path("products")
                .hoop(auth::middleware::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .put(products::update::handler)
                        .patch(products::patch::handler)
                        .delete(products::delete::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use tempfile::TempDir;
    use testresult::TestResult;

    use catalog_app::context::AppContext;

    use crate::{auth::TOKEN_HEADER, state::State};

    use super::app_router;

    const TOKEN: &str = "s3cret";

    struct Harness {
        service: Service,
        path: PathBuf,
        _dir: TempDir,
    }

    impl Harness {
        fn new(seed: &Value) -> TestResult<Self> {
            let dir = TempDir::new()?;
            let path = dir.path().join("products.json");

            fs::write(&path, serde_json::to_string_pretty(seed)?)?;

            let app = AppContext::from_products_file(&path, TOKEN.to_string())?;

            let service = Service::new(
                Router::new()
                    .hoop(inject(State::from_app_context(app)))
                    .push(app_router()),
            );

            Ok(Self {
                service,
                path,
                _dir: dir,
            })
        }

        fn stored(&self) -> TestResult<Value> {
            Ok(serde_json::from_str(&fs::read_to_string(&self.path)?)?)
        }
    }

    fn seed() -> Value {
        json!([{
            "id": 1,
            "name": "A",
            "quantity": 5,
            "code_value": "X",
            "expiration_date": "",
            "is_published": true,
            "price": 10.0
        }])
    }

    #[tokio::test]
    async fn ping_answers_pong() -> TestResult {
        let harness = Harness::new(&seed())?;

        let body = TestClient::get("http://example.com/ping")
            .send(&harness.service)
            .await
            .take_string()
            .await?;

        assert_eq!(body, "pong");

        Ok(())
    }

    #[tokio::test]
    async fn search_filters_by_minimum_price() -> TestResult {
        let harness = Harness::new(&seed())?;

        let mut res = TestClient::get("http://example.com/products/search?priceGt=5")
            .send(&harness.service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["data"][0]["id"], 1);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

        let res = TestClient::get("http://example.com/products/search?priceGt=20")
            .send(&harness.service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn reads_do_not_require_a_token() -> TestResult {
        let harness = Harness::new(&seed())?;

        let mut res = TestClient::get("http://example.com/products/1")
            .send(&harness.service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["data"]["code_value"], "X");
        assert!(
            body["data"].get("expiration_date").is_none(),
            "empty expiration should be omitted"
        );

        Ok(())
    }

    #[tokio::test]
    async fn writes_without_valid_token_are_rejected_before_parsing() -> TestResult {
        let harness = Harness::new(&seed())?;
        let before = harness.stored()?;

        let res = TestClient::post("http://example.com/products")
            .raw_json("not even json")
            .send(&harness.service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        let res = TestClient::delete("http://example.com/products/1")
            .add_header(TOKEN_HEADER, "wrong", true)
            .send(&harness.service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(harness.stored()?, before);

        Ok(())
    }

    #[tokio::test]
    async fn create_with_missing_name_is_rejected_and_not_stored() -> TestResult {
        let harness = Harness::new(&seed())?;
        let before = harness.stored()?;

        let mut res = TestClient::post("http://example.com/products")
            .add_header(TOKEN_HEADER, TOKEN, true)
            .json(&json!({ "code_value": "Y", "quantity": 1, "price": 2.5 }))
            .send(&harness.service)
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["code"], 400);
        assert_eq!(body["message"], "name is required");
        assert_eq!(harness.stored()?, before);

        Ok(())
    }

    #[tokio::test]
    async fn replace_of_absent_product_is_not_found() -> TestResult {
        let harness = Harness::new(&seed())?;
        let before = harness.stored()?;

        let res = TestClient::put("http://example.com/products/99")
            .add_header(TOKEN_HEADER, TOKEN, true)
            .json(&json!({ "name": "B", "code_value": "Z", "quantity": 1, "price": 1.0 }))
            .send(&harness.service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(harness.stored()?, before);

        Ok(())
    }

    #[tokio::test]
    async fn product_lifecycle_is_mirrored_to_disk() -> TestResult {
        let harness = Harness::new(&seed())?;

        let mut res = TestClient::post("http://example.com/products")
            .add_header(TOKEN_HEADER, TOKEN, true)
            .json(&json!({
                "name": "B",
                "quantity": 3,
                "code_value": "Y",
                "expiration_date": "01/06/2031",
                "price": 4.5
            }))
            .send(&harness.service)
            .await;

        let created: Value = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/products/2"));
        assert_eq!(created["data"]["id"], 2);
        assert_eq!(harness.stored()?[1]["expiration_date"], "01/06/2031");

        let res = TestClient::patch("http://example.com/products/2")
            .add_header(TOKEN_HEADER, TOKEN, true)
            .json(&json!({ "price": 9.99 }))
            .send(&harness.service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(harness.stored()?[1]["price"], 9.99);
        assert_eq!(harness.stored()?[1]["name"], "B");

        let res = TestClient::delete("http://example.com/products/2")
            .add_header(TOKEN_HEADER, TOKEN, true)
            .send(&harness.service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let res = TestClient::get("http://example.com/products/2")
            .send(&harness.service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(harness.stored()?.as_array().map(Vec::len), Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_code_is_rejected() -> TestResult {
        let harness = Harness::new(&seed())?;

        let res = TestClient::post("http://example.com/products")
            .add_header(TOKEN_HEADER, TOKEN, true)
            .json(&json!({ "name": "Dup", "code_value": "X", "quantity": 1, "price": 1.0 }))
            .send(&harness.service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(harness.stored()?.as_array().map(Vec::len), Some(1));

        Ok(())
    }
}
