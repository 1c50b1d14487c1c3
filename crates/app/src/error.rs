use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("seed error: {0}")]
    Seed(#[from] seeder::SeedError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
