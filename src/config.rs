use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_email_domain: String,
    pub certificate_prefix: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            admin_email_domain: env::var("ADMIN_EMAIL_DOMAIN").unwrap_or_else(|_| "@admin.com".to_string()),
            certificate_prefix: env::var("CERTIFICATE_PREFIX").unwrap_or_else(|_| "TEKRON".to_string()),
        }
    }
}
