//! Customer API
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/customers | GET | all customers |
//! | /api/customers/{id}/balance | GET | balance summary |
//! | /api/customers/{id}/payments | GET | payment history |
//! | /api/customers/{id}/payments | POST | record payment / credit / refund |
//! | /api/customers/{id}/bill | GET | HTML bill download |
//! | /api/customers/{id}/whatsapp | GET | WhatsApp share link |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/customers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}/balance", get(handler::balance))
        .route(
            "/{id}/payments",
            get(handler::payments).post(handler::record_payment),
        )
        .route("/{id}/bill", get(handler::bill))
        .route("/{id}/whatsapp", get(handler::whatsapp))
}
