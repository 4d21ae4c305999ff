mod tax_controller;

pub use tax_controller::{CalculateTaxRequest, PitRequest};

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    tax_controller::configure_routes(cfg);
}
