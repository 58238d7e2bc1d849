//! Catalog commands: stored games, seasons and the player registry

mod delete_game;
mod list_games;
mod list_known_players;
mod list_seasons;
mod load_game;

pub use delete_game::DeleteGameCommand;
pub use list_games::ListGamesCommand;
pub use list_known_players::ListKnownPlayersCommand;
pub use list_seasons::ListSeasonsCommand;
pub use load_game::LoadGameCommand;
