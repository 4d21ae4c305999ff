pub mod health;
pub mod taxes;

use actix_web::web;

use crate::middleware::json_error_handler;

/// Registers every module's routes plus the shared JSON body settings
pub fn configure(cfg: &mut web::ServiceConfig, max_payload_bytes: usize) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(max_payload_bytes)
            .error_handler(json_error_handler),
    )
    .configure(health::controllers::configure)
    .configure(taxes::controllers::configure);
}
