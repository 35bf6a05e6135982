use crate::{
    dto::{Coordinate, DetailQuery, Reading},
    service::QueryService,
    store::{ReadingStore, SqliteStore},
    util::{timestamp::parse_timestamp, ApiError},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

async fn gnss5<S: ReadingStore>(
    State(service): State<QueryService<S>>,
) -> Result<Json<Vec<Reading>>, ApiError> {
    let rows = service
        .latest_snapshot()
        .await
        .map_err(ApiError::store("Error querying GNSS data"))?;

    Ok(Json(rows))
}

async fn gnss_coords<S: ReadingStore>(
    State(service): State<QueryService<S>>,
) -> Result<Json<Vec<Coordinate>>, ApiError> {
    let coords = service
        .coordinates()
        .await
        .map_err(ApiError::store("Error fetching coordinates"))?;

    Ok(Json(coords))
}

async fn gnss_ids<S: ReadingStore>(
    State(service): State<QueryService<S>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let ids = service
        .station_ids()
        .await
        .map_err(ApiError::store("Error fetching GNSS IDs"))?;

    Ok(Json(ids))
}

async fn sensors<S: ReadingStore>(
    State(service): State<QueryService<S>>,
    Path((gnss_id,)): Path<(String,)>,
) -> Result<Json<Vec<String>>, ApiError> {
    let ids = service
        .channel_ids(&gnss_id)
        .await
        .map_err(ApiError::store("Error fetching sensor IDs"))?;

    Ok(Json(ids))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailParams {
    gnss_id: String,
    sensor_id: String,
    start_date: Option<String>,
    end_date: Option<String>,
}

fn parse_bound(name: &str, value: Option<&str>) -> Result<Option<DateTime<Utc>>, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_timestamp(raw)
            .map(Some)
            .ok_or_else(|| ApiError::BadRequest(format!("Invalid {}: {}", name, raw))),
    }
}

async fn gnss_detail<S: ReadingStore>(
    State(service): State<QueryService<S>>,
    Query(params): Query<DetailParams>,
) -> Result<Json<Vec<Reading>>, ApiError> {
    let query = DetailQuery::new(params.gnss_id, params.sensor_id)
        .starting_at(parse_bound("startDate", params.start_date.as_deref())?)
        .ending_at(parse_bound("endDate", params.end_date.as_deref())?);

    let rows = service
        .detail(&query)
        .await
        .map_err(ApiError::store("Error fetching GNSS detail data"))?;

    Ok(Json(rows))
}

pub fn router<S: ReadingStore>(service: QueryService<S>) -> Router {
    Router::new()
        .route("/api/gnss5", get(gnss5::<S>))
        .route("/api/gnss-coords", get(gnss_coords::<S>))
        .route("/api/gnss_ids", get(gnss_ids::<S>))
        .route("/api/sensors/:gnss_id", get(sensors::<S>))
        .route("/api/gnss-detail", get(gnss_detail::<S>))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

pub async fn start_server(store: SqliteStore, http_addr: String) -> anyhow::Result<()> {
    info!("Starting web server @ {}", http_addr);

    let app = router(QueryService::new(store));

    let listener = TcpListener::bind(&http_addr).await?;
    info!("Listening on {}", &http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Unable to listen for Ctrl-C: {:?}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Unable to listen for SIGTERM: {:?}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown requested");
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
