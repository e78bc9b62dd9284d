use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tracing::info;

use crate::{error::AppError, pages, select, state::AppState};

#[derive(Deserialize)]
pub struct UploadForm {
    story: Option<String>,
}

#[derive(Deserialize)]
pub struct ViewParams {
    filename: Option<String>,
}

#[derive(Deserialize)]
pub struct RandomParams {
    filter: Option<String>,
}

#[derive(Deserialize)]
pub struct AdminParams {
    username: Option<String>,
}

pub async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let stories = state.store.list().await?;

    Ok(Html(pages::index(&stories)))
}

pub async fn upload_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UploadForm>,
) -> Result<Html<String>, AppError> {
    let story = form
        .story
        .filter(|story| !story.is_empty())
        .ok_or(AppError::MissingParam("story"))?;

    if story.len() > state.config.max_story_bytes {
        return Err(AppError::StoryTooLarge);
    }

    let filename = state.store.create(&story).await?;
    info!("Stored story {filename}");

    Ok(Html(pages::upload_success(&filename)))
}

pub async fn view_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ViewParams>,
) -> Result<Html<String>, AppError> {
    let filename = params
        .filename
        .filter(|filename| !filename.is_empty())
        .ok_or(AppError::MissingParam("filename"))?;

    let content = state.store.read(&filename).await?;

    Ok(Html(pages::base_page(&filename, &content)))
}

pub async fn random_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RandomParams>,
) -> Result<Redirect, AppError> {
    let stories = state.store.list().await?;
    let filter = params.filter.as_deref().filter(|filter| !filter.is_empty());

    let name = select::pick(&stories, filter).ok_or(AppError::NoCandidates)?;

    Ok(Redirect::to(&format!("/stories/view?filename={name}")))
}

pub async fn admin_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AdminParams>,
) -> Result<Html<String>, AppError> {
    let username = params
        .username
        .filter(|username| !username.is_empty())
        .ok_or(AppError::MissingParam("username"))?;

    if !state.oracle.is_admin(&username).await {
        return Err(AppError::NotAdmin);
    }

    Ok(Html(pages::base_page(
        "Admin Dashboard",
        &format!("Welcome to the admin dashboard, {username}!"),
    )))
}
