//! Liveness Handler

use salvo::prelude::*;

/// Ping handler
///
/// Answers `pong` in plain text.
#[endpoint(tags("health"), summary = "Liveness check")]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Text::Plain("pong"));
}
