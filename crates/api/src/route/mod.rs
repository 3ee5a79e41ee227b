pub mod chats;
pub mod library;
pub mod progress;
pub mod quiz;
pub mod tutor;
pub mod video;

/// Treats empty strings as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
