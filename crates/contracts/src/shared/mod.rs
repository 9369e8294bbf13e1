pub mod errors;
pub mod generate_content;
pub mod html;
pub mod render;
pub mod request_url;
