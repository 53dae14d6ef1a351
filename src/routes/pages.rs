use std::path::{Path, PathBuf};

use actix_web::{HttpResponse, Responder, get, web};

/// Root directory of the static collaborator pages.
#[derive(Debug, Clone)]
pub struct StaticDir(pub PathBuf);

#[get("/")]
pub async fn index_page(dir: web::Data<StaticDir>) -> impl Responder {
    serve_page(&dir.0, "index.html")
}

#[get("/about")]
pub async fn about_page(dir: web::Data<StaticDir>) -> impl Responder {
    serve_page(&dir.0, "about.html")
}

#[get("/leetcode")]
pub async fn leetcode_page(dir: web::Data<StaticDir>) -> impl Responder {
    serve_page(&dir.0, "leetcode.html")
}

#[get("/static/{file}")]
pub async fn static_asset(dir: web::Data<StaticDir>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();

    // Only plain file names; anything path-like is rejected
    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return HttpResponse::NotFound().body("not found");
    }

    match std::fs::read(dir.0.join(&name)) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(content_type_for(&name))
            .body(bytes),
        Err(_) => HttpResponse::NotFound().body("not found"),
    }
}

fn serve_page(dir: &Path, name: &str) -> HttpResponse {
    match std::fs::read_to_string(dir.join(name)) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::warn!("failed to read page {name}: {e}");
            HttpResponse::NotFound().body("page not found")
        }
    }
}

fn content_type_for(name: &str) -> &'static str {
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
