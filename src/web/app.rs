use actix_web::{web, HttpRequest, HttpResponse, Result};
use base64::{Engine as _, engine::general_purpose};
use log::{error, info};
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::domain::{AuctionSource, Errors, PaymentGenerator, PaymentSink, SystemClock, User};
use crate::persistence::json_file::{read_auctions, read_payments, JsonFilePayments};
use crate::persistence::{InMemoryAuctions, InMemoryPayments};
use super::types::{AddAuctionRequest, ApiError, AppState};

// Initialize application state, seeding auctions from the configured file
pub fn init_app_state(config: &Config) -> std::result::Result<AppState, Errors> {
    let auctions = match &config.auctions_file {
        Some(path) => {
            let loaded = read_auctions(path).map_err(Errors::AuctionSourceUnavailable)?;
            info!("Loaded {} auctions from {}", loaded.len(), path.display());
            InMemoryAuctions::from_auctions(loaded)?
        },
        None => InMemoryAuctions::new(),
    };

    // Payments saved by earlier runs are kept; the file is rewritten in full on every save
    let payments = match &config.payments_file {
        Some(path) if path.exists() => {
            let loaded = read_payments(path).map_err(Errors::PaymentsUnavailable)?;
            info!("Loaded {} payments from {}", loaded.len(), path.display());
            InMemoryPayments::from_payments(loaded)
        },
        _ => InMemoryPayments::new(),
    };

    Ok(AppState {
        auctions: Arc::new(Mutex::new(auctions)),
        payments: Arc::new(Mutex::new(payments)),
        clock: Arc::new(SystemClock),
        due_date_basis: config.due_date_basis,
        payments_file: config.payments_file.clone(),
    })
}

// Read x-jwt-payload header and extract user information
fn get_auth_user(req: &HttpRequest) -> Option<User> {
    let auth_header = req.headers().get("x-jwt-payload")?;
    let auth_str = auth_header.to_str().ok()?;

    let decoded = general_purpose::STANDARD.decode(auth_str).ok()?;
    let json_str = String::from_utf8(decoded).ok()?;
    let json: Value = serde_json::from_str(&json_str).ok()?;

    let sub = json.get("sub")?.as_str()?;
    let u_typ = json.get("u_typ")?.as_str()?;

    if u_typ == "0" {
        let name = json.get("name")?.as_str()?;
        Some(User::BuyerOrSeller {
            user_id: sub.to_string(),
            name: name.to_string(),
        })
    } else if u_typ == "1" {
        Some(User::Support {
            user_id: sub.to_string(),
        })
    } else {
        None
    }
}

async fn with_auth<F>(req: HttpRequest, f: F) -> Result<HttpResponse>
where
    F: FnOnce(User) -> Result<HttpResponse>
{
    match get_auth_user(&req) {
        Some(user) => f(user),
        None => Ok(HttpResponse::Unauthorized().body("Unauthorized")),
    }
}

fn poisoned<T>(_: T) -> actix_web::Error {
    actix_web::error::ErrorInternalServerError("application state is poisoned")
}

fn server_error(message: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiError { message })
}

async fn get_closed_auctions(data: web::Data<AppState>) -> Result<HttpResponse> {
    let auctions = data.auctions.lock().map_err(poisoned)?;
    match auctions.closed_auctions() {
        Ok(closed) => Ok(HttpResponse::Ok().json(closed)),
        Err(err) => Ok(server_error(err.to_string())),
    }
}

async fn create_auction(
    req: HttpRequest,
    auction_req: web::Json<AddAuctionRequest>,
    data: web::Data<AppState>
) -> Result<HttpResponse> {
    with_auth(req, |_user| {
        let auction = auction_req.to_auction();
        let mut auctions = data.auctions.lock().map_err(poisoned)?;

        match auctions.add(auction.clone()) {
            Ok(()) => Ok(HttpResponse::Ok().json(auction)),
            Err(err) => Ok(HttpResponse::BadRequest().json(ApiError { message: err.to_string() })),
        }
    }).await
}

fn run_generator<P: PaymentSink>(
    data: &AppState,
    auctions: &InMemoryAuctions,
    payments: P,
) -> std::result::Result<(), Errors> {
    PaymentGenerator::new(auctions, payments)
        .with_clock(data.clock.clone())
        .with_due_date_basis(data.due_date_basis)
        .generate()
}

// Only support users may settle auctions
async fn generate_payments(req: HttpRequest, data: web::Data<AppState>) -> Result<HttpResponse> {
    with_auth(req, |user| {
        if !user.is_support() {
            return Ok(HttpResponse::Forbidden().body("Forbidden"));
        }

        let auctions = data.auctions.lock().map_err(poisoned)?;
        let mut payments = data.payments.lock().map_err(poisoned)?;
        let before = payments.len();

        let result = match &data.payments_file {
            Some(path) => run_generator(&data, &*auctions, JsonFilePayments::new(&mut *payments, path)),
            None => run_generator(&data, &*auctions, &mut *payments),
        };
        if let Err(err) = result {
            error!("Payment run requested by {} failed: {}", user.user_id(), err);
            return Ok(server_error(err.to_string()));
        }

        let created = payments.all()[before..].to_vec();
        Ok(HttpResponse::Ok().json(created))
    }).await
}

async fn get_payments(data: web::Data<AppState>) -> Result<HttpResponse> {
    let payments = data.payments.lock().map_err(poisoned)?;
    Ok(HttpResponse::Ok().json(payments.all()))
}

// Configure routes
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .route("/auctions/closed", web::get().to(get_closed_auctions))
            .route("/auctions", web::post().to(create_auction))
            .route("/payments/generate", web::post().to(generate_payments))
            .route("/payments", web::get().to(get_payments))
    );
}
