// Server-side infrastructure (filesystem content loading)

pub mod content;
