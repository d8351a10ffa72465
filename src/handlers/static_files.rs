//! `/public/*`: files read straight from the configured public directory.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use tracing::debug;

use super::not_found;
use crate::errors::AppResult;

/// Root directory for static assets.
#[derive(Debug, Clone)]
pub struct PublicDir(pub PathBuf);

/// Configure the static asset route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/public/{path:.*}", web::get().to(serve));
}

/// Accept only plain relative paths: no `..`, no root, no prefix.
fn safe_relative(raw: &str) -> Option<PathBuf> {
    let path = Path::new(raw);
    if raw.is_empty() || !path.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(path.to_path_buf())
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("html") => "text/html; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

async fn serve(root: web::Data<PublicDir>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let Some(relative) = safe_relative(&path) else {
        debug!(path = %path, "rejected static path");
        return Ok(not_found());
    };
    let full = root.0.join(relative);

    match tokio::fs::metadata(&full).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Ok(not_found()),
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(not_found()),
        Err(e) => return Err(e.into()),
    }

    let bytes = tokio::fs::read(&full).await?;
    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, content_type_for(&full)))
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_is_rejected() {
        assert!(safe_relative("../Cargo.toml").is_none());
        assert!(safe_relative("css/../../secret").is_none());
        assert!(safe_relative("/etc/passwd").is_none());
        assert!(safe_relative("").is_none());
    }

    #[test]
    fn nested_paths_are_accepted() {
        assert_eq!(safe_relative("css/site.css"), Some(PathBuf::from("css/site.css")));
    }

    #[test]
    fn css_gets_text_css() {
        assert_eq!(content_type_for(Path::new("styles.css")), "text/css; charset=utf-8");
        assert_eq!(content_type_for(Path::new("blob")), "application/octet-stream");
    }
}
