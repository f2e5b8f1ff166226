#[derive(Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub cors_origin: String,
    pub media_dir: String,
    pub media_public_base: String,
    pub cookie_secure: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let server_host =
            std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port: u16 = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()?;

        let media_public_base = std::env::var("MEDIA_PUBLIC_BASE")
            .unwrap_or_else(|_| format!("http://{}:{}/media", server_host, server_port));

        Ok(Self {
            jwt_secret: std::env::var("JWT_SECRET")?,
            server_host,
            server_port,
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            media_dir: std::env::var("MEDIA_DIR").unwrap_or_else(|_| "./media".to_string()),
            media_public_base,
            cookie_secure: std::env::var("COOKIE_SECURE")
                .map(|v| v != "false")
                .unwrap_or(true),
        })
    }
}
