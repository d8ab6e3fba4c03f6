//! Auth middleware.
//!
//! Guards mutating product routes. Runs before the handler so a rejected
//! request never has its body parsed.

use std::sync::Arc;

use catalog_app::auth::AuthServiceError;
use salvo::prelude::*;
use tracing::warn;

use crate::{auth::TOKEN_HEADER, envelope::ApiError, extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let token = req.header::<String>(TOKEN_HEADER).unwrap_or_default();

    if let Err(AuthServiceError::InvalidToken) = state.app.auth.authenticate(&token) {
        warn!(
            method = %req.method(),
            path = %req.uri().path(),
            "rejected request with invalid token"
        );

        res.render(ApiError::unauthorized("invalid authentication token"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}
