use std::any::Any;

use axum::{
    http::Method,
    response::{IntoResponse, Response},
    routing::{get, put},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};

use crate::server::{
    controller::{
        docs::openapi,
        instructor::{
            create_instructor, delete_instructor, get_instructor, get_instructors,
            update_instructor,
        },
        reservation::{
            create_reservation, delete_reservation, get_instructor_reservations, get_reservation,
            get_reservations, get_student_reservations, update_reservation_date,
            update_reservation_instructor, update_reservation_place, update_reservation_student,
            update_reservation_time,
        },
        student::{create_student, delete_student, get_student, get_students, update_student},
    },
    error::{internal::InternalError, InternalServerError},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/students", get(get_students).post(create_student))
        .route(
            "/api/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/api/instructors", get(get_instructors).post(create_instructor))
        .route(
            "/api/instructors/{id}",
            get(get_instructor)
                .put(update_instructor)
                .delete(delete_instructor),
        )
        .route(
            "/api/reservations",
            get(get_reservations).post(create_reservation),
        )
        .route(
            "/api/reservations/{id}",
            get(get_reservation).delete(delete_reservation),
        )
        .route(
            "/api/reservations/student/{id}",
            get(get_student_reservations),
        )
        .route(
            "/api/reservations/instructor/{id}",
            get(get_instructor_reservations),
        )
        .route("/api/reservations/{id}/time", put(update_reservation_time))
        .route("/api/reservations/{id}/date", put(update_reservation_date))
        .route(
            "/api/reservations/{id}/instructor",
            put(update_reservation_instructor),
        )
        .route(
            "/api/reservations/{id}/student",
            put(update_reservation_student),
        )
        .route("/api/reservations/{id}/place", put(update_reservation_place))
        .route("/api/docs/openapi.json", get(openapi))
}

/// Builds the complete application: routes, shared state and middleware.
///
/// Panics inside handlers become the generic 500 envelope instead of dropping the
/// connection.
pub fn app(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(cors::Any);

    router()
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    InternalServerError(InternalError::Panic(detail)).into_response()
}
