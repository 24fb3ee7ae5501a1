use crate::{error::GalleryError, gallery::GalleryItem, sidebar::SidebarEntry, state::Gallery};
use axum::{
    http::Method,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use axum_macros::debug_handler;
use minijinja::context;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

pub fn router(state: Gallery) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET]);

    Router::new()
        .nest_service("/public", ServeDir::new("public"))
        .route("/side", get(sidebar_init))
        .route("/side/:id", get(sidebar_entries))
        .route("/gallery/:id", get(select_gallery))
        .route("/", get(index))
        .route("/*path", get(index))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Index page. Any path segment is treated as a deep link and matched
/// against folder paths; unknown paths just load with nothing selected.
#[debug_handler]
pub async fn index(
    state: axum::extract::State<Gallery>,
    path: Option<axum::extract::Path<String>>,
) -> Result<impl IntoResponse, GalleryError> {
    let folder = path
        .map(|p| p.0)
        .or_else(|| state.initial_folder.clone())
        .unwrap_or_default();

    if !folder.is_empty() {
        info!("Restoring deep link {folder}");
        state.select_by_path(&folder);
    }

    let selection = state.selection();

    let template = state.context.get_template("index")?;
    let page = template.render(context! {
        title => state.title,
        current_folder => selection.current_folder,
        items => selection.items,
    })?;

    Ok(Html(page))
}

pub async fn sidebar_init(
    state: axum::extract::State<Gallery>,
) -> Result<Json<Vec<SidebarEntry>>, GalleryError> {
    Ok(Json(state.sidebar()))
}

pub async fn sidebar_entries(
    state: axum::extract::State<Gallery>,
    id: axum::extract::Path<String>,
) -> Result<Json<Vec<SidebarEntry>>, GalleryError> {
    Ok(Json(state.sidebar_for(&id.0)?))
}

/// Folder selection: returns the gallery items and makes the folder the
/// current one.
pub async fn select_gallery(
    state: axum::extract::State<Gallery>,
    id: axum::extract::Path<String>,
) -> Result<Json<Vec<GalleryItem>>, GalleryError> {
    Ok(Json(state.select_by_id(&id.0)?))
}
