#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! NYPD arrests dashboard server binary.

#[actix_web::main]
async fn main() -> Result<(), nypd_arrests_server::ServerError> {
    nypd_arrests_server::run_server().await
}
