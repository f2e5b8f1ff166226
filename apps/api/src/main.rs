use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::config::Config;
use api::handlers::{auth, health, loops, messages, posts, stories, users};
use api::middleware::auth::AuthMiddleware;
use infrastructure::mail::{LogMailer, Mailer};
use infrastructure::media::{LocalMediaStorage, MediaStorage};
use infrastructure::store::Store;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,api=debug,actix_web=info".into());

    let is_json = std::env::var("LOG_FORMAT").unwrap_or_default() == "json";

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }

    let config = Config::from_env()?;
    let config_data = web::Data::new(config.clone());
    tracing::info!("Starting vybe API server...");

    let store = Store::in_memory();
    let media: Arc<dyn MediaStorage> =
        Arc::new(LocalMediaStorage::new(&config.media_dir, &config.media_public_base));
    let media_data: web::Data<dyn MediaStorage> = web::Data::from(media);
    let mailer: Arc<dyn Mailer> = Arc::new(LogMailer);
    let mailer_data: web::Data<dyn Mailer> = web::Data::from(mailer);

    let server_addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Server listening on {}", server_addr);

    let cors_origin = config.cors_origin.clone();
    HttpServer::new(move || {
        // Credentials (the session cookie) rule out a wildcard origin
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(AuthMiddleware)
            .app_data(web::Data::new(store.clone()))
            .app_data(config_data.clone())
            .app_data(media_data.clone())
            .app_data(mailer_data.clone())
            .service(health::health_check)
            // Auth
            .service(auth::signup)
            .service(auth::signin)
            .service(auth::signout)
            .service(auth::send_otp)
            .service(auth::verify_otp)
            .service(auth::reset_password)
            // Users and the social graph
            .service(users::current_user)
            .service(users::get_user_by_id)
            .service(users::suggested_users)
            .service(users::search)
            .service(users::get_profile)
            .service(users::toggle_follow)
            .service(users::get_following)
            .service(users::edit_profile)
            // Posts
            .service(posts::upload_post)
            .service(posts::get_all_posts)
            .service(posts::toggle_like_post)
            .service(posts::add_comment_to_post)
            .service(posts::toggle_save_post)
            // Loops
            .service(loops::upload_loop)
            .service(loops::get_all_loops)
            .service(loops::toggle_like_loop)
            .service(loops::add_comment_to_loop)
            // Stories
            .service(stories::upload_story)
            .service(stories::view_story)
            .service(stories::get_story_by_username)
            .service(stories::get_all_stories)
            // Direct messages
            .service(messages::send_message)
            .service(messages::get_all_messages)
            .service(messages::prev_chats)
    })
    .bind(&server_addr)?
    .run()
    .await?;

    Ok(())
}
