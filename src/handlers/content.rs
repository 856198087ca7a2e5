use crate::content::{BlogPost, BrandInfo, JobOpening, PortfolioItem, Service, TeamMember, Testimonial};
use crate::error::AppError;
use crate::handlers::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PortfolioQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BlogQuery {
    pub tag: Option<String>,
}

pub async fn get_brand(State(state): State<AppState>) -> Json<BrandInfo> {
    Json(state.content.brand.clone())
}

pub async fn list_services(State(state): State<AppState>) -> Json<Vec<Service>> {
    Json(state.content.services.clone())
}

pub async fn get_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Service>, AppError> {
    state
        .content
        .service(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("service '{}'", slug)))
}

pub async fn list_portfolio(
    State(state): State<AppState>,
    Query(query): Query<PortfolioQuery>,
) -> Json<Vec<PortfolioItem>> {
    let items = state
        .content
        .portfolio_in(query.category.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Json(items)
}

pub async fn list_testimonials(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    Json(state.content.testimonials.clone())
}

pub async fn list_team(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    Json(state.content.team.clone())
}

pub async fn list_careers(State(state): State<AppState>) -> Json<Vec<JobOpening>> {
    Json(state.content.careers.clone())
}

pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<BlogQuery>,
) -> Json<Vec<BlogPost>> {
    let posts = state
        .content
        .posts_tagged(query.tag.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Json(posts)
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    state
        .content
        .post(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("blog post '{}'", slug)))
}
