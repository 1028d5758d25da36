pub mod create;
pub mod read;
pub mod update;
pub mod delete;
pub mod root;
pub mod health;

pub use create::create_handler;
pub use read::read_handler;
pub use update::update_handler;
pub use delete::delete_handler;
pub use root::root_handler;
pub use health::health_handler;
