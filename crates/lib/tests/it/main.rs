/*! Integration tests for aiguide.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - user: Registration rules and the credential store under concurrency
 * - auth: Login, token issuance, verification and expiry
 * - catalog: Catalog loading and topic matching
 * - chat: The bearer-token gate in front of the matcher
 * - server: The JSON API end to end over HTTP
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("aiguide=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod auth;
mod helpers;
mod server;
