use std::io;
use std::path::Path;
use std::sync::Arc;

use ntex::web;
use ntex_files::NamedFile;
use serde::Deserialize;
use spdlog::{error, warn};

use crate::config::Config;
use crate::content::collection::Collection;
use crate::content::record::{Post, Project};
use crate::messages::{validate_submission, MessageStore};
use crate::view::contact_renderer::{ContactRenderer, Flash, MessageListRenderer, MessageRow};
use crate::view::detail_renderer::{DetailPage, DetailRenderer};
use crate::view::list_renderer::{ListEntry, ListRenderer};
use crate::view::markdown::render_markdown;
use crate::view::page_renderer::PageRenderer;

struct AppState {
    config: Config,
    posts: Collection<Post>,
    projects: Collection<Project>,
    store: Option<MessageStore>,
}

fn read_template(tpl_dir: &Path, file_name: &str) -> io::Result<String> {
    std::fs::read_to_string(tpl_dir.join(file_name))
}

fn html_ok(body: String) -> web::HttpResponse {
    web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn render_site_page(state: &AppState, template_filename: &str) -> io::Result<String> {
    let template_src = read_template(&state.config.paths.template_dir, template_filename)?;
    let renderer = PageRenderer::new(&template_src)?;

    Ok(renderer.render(
        &state.config.site.title,
        &state.config.site.author,
        state.posts.list_all().len(),
        state.projects.list_all().len(),
    ))
}

#[web::get("/")]
async fn home(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    match render_site_page(&state, "home.tpl") {
        Ok(body) => html_ok(body),
        Err(e) => web::HttpResponse::InternalServerError()
            .body(format!("Error rendering home page: {}", e)),
    }
}

#[web::get("/about")]
async fn about(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    match render_site_page(&state, "about.tpl") {
        Ok(body) => html_ok(body),
        Err(e) => web::HttpResponse::InternalServerError()
            .body(format!("Error rendering about page: {}", e)),
    }
}

fn render_listing(
    state: &AppState,
    template_filename: &str,
    heading: &str,
    entries: &[ListEntry],
) -> io::Result<String> {
    let template_src = read_template(&state.config.paths.template_dir, template_filename)?;
    let renderer = ListRenderer::new(&template_src)?;
    Ok(renderer.render(&state.config.site.title, heading, entries))
}

#[web::get("/blog")]
async fn blog_list(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let entries: Vec<ListEntry> = state
        .posts
        .list_all()
        .into_iter()
        .map(|post| ListEntry {
            link: format!("/blog/{}", post.slug),
            title: post.title,
            date: post.date,
            description: post.description.unwrap_or_default(),
            language: None,
        })
        .collect();

    match render_listing(&state, "blog_list.tpl", "Blog", &entries) {
        Ok(body) => html_ok(body),
        Err(e) => {
            web::HttpResponse::InternalServerError().body(format!("Error listing posts: {}", e))
        }
    }
}

#[web::get("/projects")]
async fn project_list(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let entries: Vec<ListEntry> = state
        .projects
        .list_all()
        .into_iter()
        .map(|project| ListEntry {
            link: format!("/projects/{}", project.slug),
            title: project.title,
            date: project.date,
            description: project.description.unwrap_or_default(),
            language: project.language,
        })
        .collect();

    match render_listing(&state, "project_list.tpl", "Projects", &entries) {
        Ok(body) => html_ok(body),
        Err(e) => {
            web::HttpResponse::InternalServerError().body(format!("Error listing projects: {}", e))
        }
    }
}

fn render_post_detail(state: &AppState, slug: &str) -> io::Result<Option<String>> {
    let Some(post) = state.posts.get_by_slug(slug) else {
        return Ok(None);
    };

    let content = render_markdown(post.body.as_deref().unwrap_or(""))?;
    let template_src = read_template(&state.config.paths.template_dir, "post.tpl")?;
    let renderer = DetailRenderer::new(&template_src)?;

    Ok(Some(renderer.render(&DetailPage {
        site_title: &state.config.site.title,
        title: &post.title,
        date: &post.date,
        description: post.description.as_deref(),
        language: None,
        repo: None,
        content: &content,
    })))
}

fn render_project_detail(state: &AppState, slug: &str) -> io::Result<Option<String>> {
    let Some(project) = state.projects.get_by_slug(slug) else {
        return Ok(None);
    };

    let content = render_markdown(project.body.as_deref().unwrap_or(""))?;
    let template_src = read_template(&state.config.paths.template_dir, "project.tpl")?;
    let renderer = DetailRenderer::new(&template_src)?;

    Ok(Some(renderer.render(&DetailPage {
        site_title: &state.config.site.title,
        title: &project.title,
        date: &project.date,
        description: project.description.as_deref(),
        language: project.language.as_deref(),
        repo: project.repo.as_deref(),
        content: &content,
    })))
}

#[web::get("/blog/{slug}")]
async fn view_post(
    path: web::types::Path<String>,
    state: web::types::State<Arc<AppState>>,
) -> web::HttpResponse {
    let slug = path.into_inner();
    match render_post_detail(&state, &slug) {
        Ok(Some(body)) => html_ok(body),
        Ok(None) => web::HttpResponse::NotFound().body(format!("Post not found: {}", slug)),
        Err(e) => web::HttpResponse::InternalServerError()
            .body(format!("Error loading post {}: {}", slug, e)),
    }
}

#[web::get("/projects/{slug}")]
async fn view_project(
    path: web::types::Path<String>,
    state: web::types::State<Arc<AppState>>,
) -> web::HttpResponse {
    let slug = path.into_inner();
    match render_project_detail(&state, &slug) {
        Ok(Some(body)) => html_ok(body),
        Ok(None) => web::HttpResponse::NotFound().body(format!("Project not found: {}", slug)),
        Err(e) => web::HttpResponse::InternalServerError()
            .body(format!("Error loading project {}: {}", slug, e)),
    }
}

fn render_contact(state: &AppState, flash: Option<&Flash>) -> io::Result<String> {
    let template_src = read_template(&state.config.paths.template_dir, "contact.tpl")?;
    let renderer = ContactRenderer::new(&template_src)?;
    Ok(renderer.render(&state.config.site.title, flash))
}

#[web::get("/contact")]
async fn contact_form(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    match render_contact(&state, None) {
        Ok(body) => html_ok(body),
        Err(e) => web::HttpResponse::InternalServerError()
            .body(format!("Error rendering contact page: {}", e)),
    }
}

#[derive(Deserialize)]
struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

fn retry_later() -> Flash {
    Flash {
        success: false,
        message: "Something went wrong. Try again later.".to_string(),
    }
}

async fn submit_message(state: &AppState, name: &str, email: &str, message: &str) -> Flash {
    match state.store {
        None => {
            warn!("Contact submission received but no database is configured");
            retry_later()
        }
        Some(ref store) => match store.insert(name, email, message).await {
            Ok(()) => Flash {
                success: true,
                message: "Message sent successfully!".to_string(),
            },
            Err(e) => {
                error!("Error inserting contact message: {}", e);
                retry_later()
            }
        },
    }
}

#[web::post("/contact")]
async fn contact_submit(
    form: web::types::Form<ContactForm>,
    state: web::types::State<Arc<AppState>>,
) -> web::HttpResponse {
    let form = form.into_inner();
    let name = form.name.unwrap_or_default();
    let email = form.email.unwrap_or_default();
    let message = form.message.unwrap_or_default();

    // Blank fields fail before any database round trip
    let flash = match validate_submission(&name, &email, &message) {
        Err(reason) => Flash {
            success: false,
            message: reason.to_string(),
        },
        Ok(()) => submit_message(&state, &name, &email, &message).await,
    };

    match render_contact(&state, Some(&flash)) {
        Ok(body) => html_ok(body),
        Err(e) => web::HttpResponse::InternalServerError()
            .body(format!("Error rendering contact page: {}", e)),
    }
}

#[web::get("/messages")]
async fn messages_list(state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let rows: Vec<MessageRow> = match state.store {
        None => {
            warn!("Messages listing requested but no database is configured");
            vec![]
        }
        Some(ref store) => match store.list().await {
            Ok(rows) => rows
                .into_iter()
                .map(|m| MessageRow {
                    name: m.name,
                    email: m.email,
                    message: m.message,
                    received: m.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect(),
            Err(e) => {
                error!("Error listing messages: {}", e);
                vec![]
            }
        },
    };

    let template_src = match read_template(&state.config.paths.template_dir, "messages.tpl") {
        Ok(src) => src,
        Err(e) => {
            return web::HttpResponse::InternalServerError()
                .body(format!("Error loading messages template: {}", e))
        }
    };

    let response = match MessageListRenderer::new(&template_src) {
        Ok(renderer) => html_ok(renderer.render(&state.config.site.title, &rows)),
        Err(e) => web::HttpResponse::InternalServerError()
            .body(format!("Error rendering messages: {}", e)),
    };
    response
}

#[web::get("/public/{file_name}")]
async fn public_files(
    path: web::types::Path<String>,
    state: web::types::State<Arc<AppState>>,
) -> Result<NamedFile, web::Error> {
    if path.contains("../") {
        return Err(web::error::ErrorUnauthorized("Access forbidden").into());
    }

    let file_path = state.config.paths.public_dir.join(path.into_inner());

    Ok(NamedFile::open(file_path)?)
}

pub async fn server_run(config: Config, store: Option<MessageStore>) -> io::Result<()> {
    let posts: Collection<Post> = Collection::new(config.paths.posts_dir.clone());
    let projects: Collection<Project> = Collection::new(config.paths.projects_dir.clone());

    for slug in posts.list_slugs() {
        println!("Post: {}", slug);
    }
    for slug in projects.list_slugs() {
        println!("Project: {}", slug);
    }

    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;

    // All state is immutable at request time, so a plain Arc is enough
    let app_state = Arc::new(AppState {
        config,
        posts,
        projects,
        store,
    });

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(home)
            .service(about)
            .service(blog_list)
            .service(view_post)
            .service(project_list)
            .service(view_project)
            .service(contact_form)
            .service(contact_submit)
            .service(messages_list)
            .service(public_files)
    })
    .bind((bind_addr, bind_port))?
    .run()
    .await
}
