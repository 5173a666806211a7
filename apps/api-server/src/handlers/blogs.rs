//! Blog handlers.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};
use serde::Serialize;
use uuid::Uuid;

use bloglist_core::DomainError;
use bloglist_core::domain::{Blog, BlogChanges, User};
use bloglist_core::ports::BaseRepository;
use bloglist_core::stats::{self, AuthorBlogs, AuthorLikes, FavoriteBlog};
use bloglist_shared::dto::{BlogResponse, CreateBlogRequest, OwnerSummary, UpdateBlogRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_likes: i64,
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: Option<AuthorBlogs>,
    pub most_likes: Option<AuthorLikes>,
}

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;
    let owners = load_owners(&state, &blogs).await?;

    let body: Vec<BlogResponse> = blogs
        .into_iter()
        .map(|blog| {
            let owner = blog.owner_id.and_then(|id| owners.get(&id).cloned());
            to_response(blog, owner)
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/blogs/stats
pub async fn statistics(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.find_all().await?;

    Ok(HttpResponse::Ok().json(StatsResponse {
        total_likes: stats::total_likes(&blogs),
        favorite_blog: stats::favorite_blog(&blogs),
        most_blogs: stats::most_blogs(&blogs),
        most_likes: stats::most_likes(&blogs),
    }))
}

/// GET /api/blogs/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let blog = find_blog(&state, id).await?;
    let owner = load_owner(&state, blog.owner_id).await?;

    Ok(HttpResponse::Ok().json(to_response(blog, owner)))
}

/// POST /api/blogs
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // The token may outlive its user.
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("token user no longer exists".to_string()))?;

    let blog = Blog::new(req.title, req.author, req.url, req.likes, Some(user.id))?;
    let saved = state.blogs.create(blog).await?;

    tracing::info!(blog_id = %saved.id, user = %user.username, "Blog created");

    Ok(HttpResponse::Created().json(to_response(saved, Some(owner_summary(&user)))))
}

/// PUT /api/blogs/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut blog = find_blog(&state, id).await?;
    blog.apply(BlogChanges {
        title: req.title,
        author: req.author,
        url: req.url,
        likes: req.likes,
    })?;

    let saved = state.blogs.update(blog).await?;
    let owner = load_owner(&state, saved.owner_id).await?;

    tracing::info!(blog_id = %id, likes = saved.likes, user = %identity.username, "Blog updated");

    Ok(HttpResponse::Ok().json(to_response(saved, owner)))
}

/// DELETE /api/blogs/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let blog = find_blog(&state, id).await?;

    if let Err(err) = blog.ensure_owner(identity.user_id) {
        tracing::warn!(blog_id = %id, user = %identity.username, "Delete refused, not the owner");
        return Err(err.into());
    }

    state.blogs.delete(id).await?;
    tracing::info!(blog_id = %id, user = %identity.username, "Blog deleted");

    Ok(HttpResponse::NoContent().finish())
}

async fn find_blog(state: &AppState, id: Uuid) -> AppResult<Blog> {
    state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::blog_not_found(id).into())
}

async fn load_owner(state: &AppState, owner_id: Option<Uuid>) -> AppResult<Option<OwnerSummary>> {
    let Some(owner_id) = owner_id else {
        return Ok(None);
    };
    let user = state.users.find_by_id(owner_id).await?;
    Ok(user.as_ref().map(owner_summary))
}

/// Resolve every distinct owner referenced by `blogs`.
async fn load_owners(state: &AppState, blogs: &[Blog]) -> AppResult<HashMap<Uuid, OwnerSummary>> {
    let mut owners = HashMap::new();
    for owner_id in blogs.iter().filter_map(|b| b.owner_id) {
        if owners.contains_key(&owner_id) {
            continue;
        }
        if let Some(user) = state.users.find_by_id(owner_id).await? {
            owners.insert(owner_id, owner_summary(&user));
        }
    }
    Ok(owners)
}

fn owner_summary(user: &User) -> OwnerSummary {
    OwnerSummary {
        id: user.id,
        username: user.username.clone(),
        name: user.name.clone(),
    }
}

fn to_response(blog: Blog, user: Option<OwnerSummary>) -> BlogResponse {
    BlogResponse {
        id: blog.id,
        title: blog.title,
        author: blog.author,
        url: blog.url,
        likes: blog.likes,
        user,
    }
}
